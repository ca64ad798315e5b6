// src/services/analytics.rs
//
// Read-side reporting over the task table. Everything here is recomputed
// in full on each request; nothing is persisted.

use crate::models::{
    CompanyAnalytics, CompanyRevenue, EmployeeAnalytics, GrowthPoint, MonthBucket, Task,
    TaskStatus, TasksByStatus,
};
use chrono::{DateTime, Datelike, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Best-available date for revenue bucketing:
/// updated_at, then work_done_date, then created_at.
fn revenue_date(task: &Task) -> DateTime<Utc> {
    if let Some(updated) = task.updated_at {
        return updated;
    }
    if let Some(done) = task.work_done_date {
        return done.and_time(NaiveTime::MIN).and_utc();
    }
    task.created_at
}

/// Month-over-month growth in percent, rounded to 2 decimals.
/// 100 when the prior month was zero and the current is not; 0 when both are.
pub fn growth_percentage(last_month: Decimal, current_month: Decimal) -> Decimal {
    if last_month > Decimal::ZERO {
        ((current_month - last_month) / last_month * dec!(100)).round_dp(2)
    } else if current_month > Decimal::ZERO {
        dec!(100)
    } else {
        Decimal::ZERO
    }
}

pub fn tasks_by_status(tasks: &[Task]) -> TasksByStatus {
    let count = |s: TaskStatus| tasks.iter().filter(|t| t.status == s).count() as u32;
    TasksByStatus {
        completed: count(TaskStatus::Completed),
        in_progress: count(TaskStatus::InProgress),
        pending: count(TaskStatus::Pending),
        on_hold: count(TaskStatus::OnHold),
    }
}

fn month_revenue(completed: &[&Task], year: i32, month: u32) -> Decimal {
    completed
        .iter()
        .filter(|t| {
            let d = revenue_date(t);
            d.year() == year && d.month() == month
        })
        .map(|t| t.payment_amount)
        .sum()
}

pub fn company_analytics(
    tasks: &[Task],
    employee_count: u32,
    now: DateTime<Utc>,
) -> CompanyAnalytics {
    let completed: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .collect();

    let current_month = now.month();
    let current_year = now.year();
    let (last_month, last_month_year) = if current_month == 1 {
        (12, current_year - 1)
    } else {
        (current_month - 1, current_year)
    };

    let current_month_revenue = month_revenue(&completed, current_year, current_month);
    let last_month_revenue = month_revenue(&completed, last_month_year, last_month);

    let total_revenue: Decimal = completed.iter().map(|t| t.payment_amount).sum();

    CompanyAnalytics {
        total_tasks: tasks.len() as u32,
        total_tasks_completed: completed.len() as u32,
        total_revenue,
        gst_applied: tasks.iter().filter(|t| t.gst_applied).count() as u32,
        sent_to_ca: tasks.iter().filter(|t| t.sent_to_ca).count() as u32,
        ca_payment_done: tasks.iter().filter(|t| t.ca_payment_done).count() as u32,
        employee_count,
        tasks_by_status: tasks_by_status(tasks),
        growth_percentage: growth_percentage(last_month_revenue, current_month_revenue),
        company_revenue: CompanyRevenue {
            current_month_revenue,
            last_month_revenue,
        },
    }
}

/// Aggregates over one employee's tasks (pre-filtered by the caller).
pub fn employee_analytics(tasks: &[Task]) -> EmployeeAnalytics {
    let completed: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Completed)
        .collect();

    let tasks_by_month = MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let month_tasks: Vec<&Task> = tasks
                .iter()
                .filter(|t| t.work_given_date.month0() as usize == idx)
                .collect();
            let done = month_tasks
                .iter()
                .filter(|t| t.status == TaskStatus::Completed)
                .count() as u32;
            MonthBucket {
                month: name.to_string(),
                completed: done,
                pending: month_tasks.len() as u32 - done,
            }
        })
        .collect();

    EmployeeAnalytics {
        tasks_completed: completed.len() as u32,
        tasks_pending: (tasks.len() - completed.len()) as u32,
        total_tasks: tasks.len() as u32,
        total_revenue: completed.iter().map(|t| t.employee_earning).sum(),
        tasks_by_status: tasks_by_status(tasks),
        tasks_by_month,
    }
}

/// Completed tasks per calendar month, oldest first, labelled "Jan 2026".
pub fn growth_series(tasks: &[Task]) -> Vec<GrowthPoint> {
    let mut buckets: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for task in tasks.iter().filter(|t| t.status == TaskStatus::Completed) {
        let d = task.created_at;
        *buckets.entry((d.year(), d.month())).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), tasks)| GrowthPoint {
            month: format!("{} {}", MONTH_NAMES[month as usize - 1], year),
            tasks,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssignmentType;
    use uuid::Uuid;

    fn task(status: TaskStatus, amount: Decimal, created_at: &str) -> Task {
        let created_at: DateTime<Utc> = created_at.parse().unwrap();
        Task {
            id: Uuid::new_v4(),
            client_name: "Acme".to_string(),
            project_name: "Site".to_string(),
            assignment_type: AssignmentType::Direct,
            employee_username: Some("jdoe".to_string()),
            allowed_salary_type: None,
            work_given_date: created_at.date_naive(),
            due_date: None,
            work_done_date: None,
            status,
            payment_amount: amount,
            employee_earning: amount / dec!(2),
            payment_received: false,
            gst_applied: false,
            sent_to_ca: false,
            ca_payment_done: false,
            folder_path: String::new(),
            created_at,
            updated_at: None,
        }
    }

    #[test]
    fn growth_from_zero_is_hundred_percent() {
        assert_eq!(growth_percentage(dec!(0), dec!(500)), dec!(100));
    }

    #[test]
    fn growth_rounds_to_two_decimals() {
        assert_eq!(growth_percentage(dec!(1000), dec!(1200)), dec!(20.00));
        assert_eq!(growth_percentage(dec!(300), dec!(400)), dec!(33.33));
    }

    #[test]
    fn growth_with_no_revenue_is_zero() {
        assert_eq!(growth_percentage(dec!(0), dec!(0)), dec!(0));
    }

    #[test]
    fn growth_can_be_negative() {
        assert_eq!(growth_percentage(dec!(1000), dec!(800)), dec!(-20.00));
    }

    #[test]
    fn company_revenue_buckets_by_month() {
        let now: DateTime<Utc> = "2026-08-15T12:00:00Z".parse().unwrap();
        let tasks = vec![
            task(TaskStatus::Completed, dec!(500), "2026-08-03T00:00:00Z"),
            task(TaskStatus::Completed, dec!(700), "2026-08-20T00:00:00Z"),
            task(TaskStatus::Completed, dec!(1000), "2026-07-10T00:00:00Z"),
            // not completed: excluded from revenue entirely
            task(TaskStatus::InProgress, dec!(9999), "2026-08-05T00:00:00Z"),
        ];

        let analytics = company_analytics(&tasks, 4, now);
        assert_eq!(analytics.company_revenue.current_month_revenue, dec!(1200));
        assert_eq!(analytics.company_revenue.last_month_revenue, dec!(1000));
        assert_eq!(analytics.growth_percentage, dec!(20.00));
        assert_eq!(analytics.total_revenue, dec!(2200));
        assert_eq!(analytics.total_tasks, 4);
        assert_eq!(analytics.total_tasks_completed, 3);
        assert_eq!(analytics.employee_count, 4);
    }

    #[test]
    fn revenue_date_prefers_updated_at_then_done_date() {
        let mut t = task(TaskStatus::Completed, dec!(100), "2026-01-01T00:00:00Z");
        assert_eq!(revenue_date(&t), t.created_at);

        t.work_done_date = Some("2026-03-05".parse().unwrap());
        assert_eq!(revenue_date(&t).month(), 3);

        t.updated_at = Some("2026-04-01T08:00:00Z".parse().unwrap());
        assert_eq!(revenue_date(&t).month(), 4);
    }

    #[test]
    fn january_growth_compares_against_december() {
        let now: DateTime<Utc> = "2026-01-10T00:00:00Z".parse().unwrap();
        let tasks = vec![
            task(TaskStatus::Completed, dec!(200), "2026-01-05T00:00:00Z"),
            task(TaskStatus::Completed, dec!(100), "2025-12-20T00:00:00Z"),
        ];
        let analytics = company_analytics(&tasks, 1, now);
        assert_eq!(analytics.company_revenue.last_month_revenue, dec!(100));
        assert_eq!(analytics.growth_percentage, dec!(100.00));
    }

    #[test]
    fn employee_rollup_counts_and_buckets() {
        let tasks = vec![
            task(TaskStatus::Completed, dec!(400), "2026-02-01T00:00:00Z"),
            task(TaskStatus::Pending, dec!(100), "2026-02-10T00:00:00Z"),
            task(TaskStatus::Completed, dec!(600), "2026-05-01T00:00:00Z"),
        ];

        let analytics = employee_analytics(&tasks);
        assert_eq!(analytics.tasks_completed, 2);
        assert_eq!(analytics.tasks_pending, 1);
        // employee revenue uses the earning share, not the client amount
        assert_eq!(analytics.total_revenue, dec!(500));

        let feb = &analytics.tasks_by_month[1];
        assert_eq!((feb.completed, feb.pending), (1, 1));
        let may = &analytics.tasks_by_month[4];
        assert_eq!((may.completed, may.pending), (1, 0));
    }

    #[test]
    fn growth_series_is_chronological() {
        let tasks = vec![
            task(TaskStatus::Completed, dec!(1), "2026-03-01T00:00:00Z"),
            task(TaskStatus::Completed, dec!(1), "2025-11-01T00:00:00Z"),
            task(TaskStatus::Completed, dec!(1), "2026-03-15T00:00:00Z"),
            task(TaskStatus::Pending, dec!(1), "2026-04-01T00:00:00Z"),
        ];

        let series = growth_series(&tasks);
        assert_eq!(
            series,
            vec![
                GrowthPoint { month: "Nov 2025".to_string(), tasks: 1 },
                GrowthPoint { month: "Mar 2026".to_string(), tasks: 2 },
            ]
        );
    }
}
