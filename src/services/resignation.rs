// src/services/resignation.rs

use crate::models::{ApprovalStatus, Resignation};
use chrono::{DateTime, Duration, Utc};

/// Waiting period after a rejection before an employee may re-apply.
pub const COOLDOWN_DAYS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// A PENDING or APPROVED request already exists.
    ActiveRequest,
    /// The latest rejection is younger than the cooldown window.
    Cooldown { days_remaining: i64 },
}

/// Decide whether `username`'s next resignation request may be created,
/// given that caller's full submission history.
///
/// Only the most recently submitted REJECTED record is consulted for the
/// cooldown; older rejections are ignored.
pub fn check_eligibility(history: &[Resignation], now: DateTime<Utc>) -> Result<(), Denial> {
    let has_active = history
        .iter()
        .any(|r| matches!(r.status, ApprovalStatus::Pending | ApprovalStatus::Approved));
    if has_active {
        return Err(Denial::ActiveRequest);
    }

    let last_rejected = history
        .iter()
        .filter(|r| r.status == ApprovalStatus::Rejected)
        .max_by_key(|r| r.submitted_at);

    if let Some(rejected) = last_rejected {
        let cooldown = Duration::days(COOLDOWN_DAYS);
        let elapsed = now - rejected.submitted_at;
        if elapsed < cooldown {
            let remaining = cooldown - elapsed;
            // ceiling of remaining whole days
            let days_remaining = (remaining.num_seconds() + 86_399) / 86_400;
            return Err(Denial::Cooldown { days_remaining });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn resignation(status: ApprovalStatus, submitted_at: DateTime<Utc>) -> Resignation {
        Resignation {
            id: Uuid::new_v4(),
            username: "jdoe".to_string(),
            submitted_at,
            last_working_day: submitted_at.date_naive() + Duration::days(30),
            reason: "moving on".to_string(),
            status,
            created_at: submitted_at,
        }
    }

    fn at(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn empty_history_allows() {
        assert_eq!(check_eligibility(&[], Utc::now()), Ok(()));
    }

    #[test]
    fn pending_request_blocks() {
        let history = [resignation(ApprovalStatus::Pending, at("2026-01-01T00:00:00Z"))];
        assert_eq!(
            check_eligibility(&history, at("2026-06-01T00:00:00Z")),
            Err(Denial::ActiveRequest)
        );
    }

    #[test]
    fn approved_request_blocks_regardless_of_age() {
        let history = [resignation(ApprovalStatus::Approved, at("2020-01-01T00:00:00Z"))];
        assert_eq!(
            check_eligibility(&history, at("2026-06-01T00:00:00Z")),
            Err(Denial::ActiveRequest)
        );
    }

    #[test]
    fn rejection_one_hour_ago_leaves_three_days() {
        let history = [resignation(ApprovalStatus::Rejected, at("2026-06-01T00:00:00Z"))];
        assert_eq!(
            check_eligibility(&history, at("2026-06-01T01:00:00Z")),
            Err(Denial::Cooldown { days_remaining: 3 })
        );
    }

    #[test]
    fn rejection_just_under_cooldown_leaves_one_day() {
        let history = [resignation(ApprovalStatus::Rejected, at("2026-06-01T00:00:00Z"))];
        assert_eq!(
            check_eligibility(&history, at("2026-06-03T23:59:59Z")),
            Err(Denial::Cooldown { days_remaining: 1 })
        );
    }

    #[test]
    fn exactly_seventy_two_hours_allows() {
        let history = [resignation(ApprovalStatus::Rejected, at("2026-06-01T00:00:00Z"))];
        assert_eq!(check_eligibility(&history, at("2026-06-04T00:00:00Z")), Ok(()));
    }

    #[test]
    fn only_latest_rejection_counts() {
        // Old rejection long expired, fresh one still cooling down.
        let history = [
            resignation(ApprovalStatus::Rejected, at("2026-01-01T00:00:00Z")),
            resignation(ApprovalStatus::Rejected, at("2026-06-01T00:00:00Z")),
        ];
        assert_eq!(
            check_eligibility(&history, at("2026-06-02T00:00:00Z")),
            Err(Denial::Cooldown { days_remaining: 2 })
        );
    }

    #[test]
    fn expired_cooldown_allows_resubmission() {
        let history = [resignation(ApprovalStatus::Rejected, at("2026-05-01T00:00:00Z"))];
        assert_eq!(check_eligibility(&history, at("2026-06-01T00:00:00Z")), Ok(()));
    }
}
