// src/services/attendance.rs

use crate::models::{ApprovalStatus, AttendanceKind, AttendanceRecord, AttendanceSummary, DayStatus};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Parse a "YYYY-MM" month filter.
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let (year, month) = s.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

/// Date used when filtering a record into a calendar month: the marked day
/// for attendance rows, the leave start for leave rows.
fn filter_date(record: &AttendanceRecord) -> NaiveDate {
    match record.kind {
        AttendanceKind::Attendance => record.work_date,
        AttendanceKind::Leave => record.leave_start,
    }
    .unwrap_or_else(|| record.created_at.date_naive())
}

pub fn record_in_month(record: &AttendanceRecord, year: i32, month: u32) -> bool {
    let d = filter_date(record);
    d.year() == year && d.month() == month
}

/// Per-employee rollup: day-status counts plus approved leave days.
/// Pending and rejected leave never counts toward the summary.
pub fn summarize(records: &[AttendanceRecord]) -> Vec<AttendanceSummary> {
    let mut by_employee: BTreeMap<&str, AttendanceSummary> = BTreeMap::new();

    for record in records {
        let entry = by_employee
            .entry(record.employee_username.as_str())
            .or_insert_with(|| AttendanceSummary {
                employee_username: record.employee_username.clone(),
                full_days: 0,
                half_days: 0,
                absent_days: 0,
                approved_leave_days: 0,
            });

        match record.kind {
            AttendanceKind::Attendance => match record.day_status {
                Some(DayStatus::Full) => entry.full_days += 1,
                Some(DayStatus::Half) => entry.half_days += 1,
                Some(DayStatus::Absent) => entry.absent_days += 1,
                None => {}
            },
            AttendanceKind::Leave => {
                if record.approval_status == Some(ApprovalStatus::Approved) {
                    entry.approved_leave_days += record.day_count.unwrap_or(0).max(0) as u32;
                }
            }
        }
    }

    by_employee.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn attendance(username: &str, date: &str, status: DayStatus) -> AttendanceRecord {
        let work_date: NaiveDate = date.parse().unwrap();
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_username: username.to_string(),
            kind: AttendanceKind::Attendance,
            work_date: Some(work_date),
            day_status: Some(status),
            leave_start: None,
            leave_end: None,
            day_count: None,
            reason: None,
            approval_status: None,
            created_at: Utc.from_utc_datetime(&work_date.and_hms_opt(9, 0, 0).unwrap()),
            updated_at: None,
        }
    }

    fn leave(username: &str, start: &str, days: i32, status: ApprovalStatus) -> AttendanceRecord {
        let leave_start: NaiveDate = start.parse().unwrap();
        AttendanceRecord {
            id: Uuid::new_v4(),
            employee_username: username.to_string(),
            kind: AttendanceKind::Leave,
            work_date: None,
            day_status: None,
            leave_start: Some(leave_start),
            leave_end: Some(leave_start + chrono::Duration::days(days as i64 - 1)),
            day_count: Some(days),
            reason: Some("family".to_string()),
            approval_status: Some(status),
            created_at: Utc.from_utc_datetime(&leave_start.and_hms_opt(9, 0, 0).unwrap()),
            updated_at: None,
        }
    }

    #[test]
    fn parses_month_filter() {
        assert_eq!(parse_month("2026-08"), Some((2026, 8)));
        assert_eq!(parse_month("2026-13"), None);
        assert_eq!(parse_month("august"), None);
    }

    #[test]
    fn filters_records_into_months() {
        let a = attendance("jdoe", "2026-08-03", DayStatus::Full);
        assert!(record_in_month(&a, 2026, 8));
        assert!(!record_in_month(&a, 2026, 7));

        let l = leave("jdoe", "2026-07-30", 4, ApprovalStatus::Pending);
        assert!(record_in_month(&l, 2026, 7));
    }

    #[test]
    fn summary_counts_day_statuses_per_employee() {
        let records = vec![
            attendance("amit", "2026-08-01", DayStatus::Full),
            attendance("amit", "2026-08-02", DayStatus::Half),
            attendance("amit", "2026-08-03", DayStatus::Full),
            attendance("zara", "2026-08-01", DayStatus::Absent),
        ];

        let summary = summarize(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].employee_username, "amit");
        assert_eq!(summary[0].full_days, 2);
        assert_eq!(summary[0].half_days, 1);
        assert_eq!(summary[1].absent_days, 1);
    }

    #[test]
    fn only_approved_leave_counts() {
        let records = vec![
            leave("amit", "2026-08-04", 3, ApprovalStatus::Approved),
            leave("amit", "2026-08-20", 5, ApprovalStatus::Pending),
            leave("amit", "2026-08-25", 2, ApprovalStatus::Rejected),
        ];

        let summary = summarize(&records);
        assert_eq!(summary[0].approved_leave_days, 3);
    }
}
