// src/handlers/attendance.rs

use crate::{
    auth::AuthUser,
    errors::{AppError, AppResult},
    models::{
        ApprovalStatus, AttendanceFilter, AttendanceListResponse, AttendanceRecord, Employee,
        MarkAttendanceRequest, ResolveLeaveRequest, SubmitLeaveRequest,
    },
    services::attendance::{parse_month, record_in_month, summarize},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use bcrypt::verify;
use chrono::Utc;
use uuid::Uuid;

/// Mark today's attendance. The caller's password is re-verified on every
/// mark; a same-day resubmission overwrites the earlier status.
#[utoipa::path(
    post,
    path = "/api/v1/attendance",
    request_body = MarkAttendanceRequest,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceRecord),
        (status = 401, description = "Invalid password"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<MarkAttendanceRequest>,
) -> AppResult<Json<AttendanceRecord>> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE username = $1")
        .bind(&body.employee_username)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

    let valid = verify(&body.password, &employee.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !valid {
        return Err(AppError::Unauthorized("Invalid password".to_string()));
    }

    let today = Utc::now().date_naive();

    // Same-day resubmission upserts rather than rejecting.
    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"INSERT INTO attendance (id, employee_username, kind, work_date, day_status, created_at)
        VALUES ($1, $2, 'attendance', $3, $4, NOW())
        ON CONFLICT (employee_username, work_date) WHERE kind = 'attendance'
        DO UPDATE SET day_status = EXCLUDED.day_status, updated_at = NOW()
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.employee_username)
    .bind(today)
    .bind(body.status)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(record))
}

/// List attendance and leave records with a per-employee summary
#[utoipa::path(
    get,
    path = "/api/v1/attendance",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Records and summary", body = AttendanceListResponse),
        (status = 400, description = "Malformed month filter"),
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn list_attendance(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<AttendanceFilter>,
) -> AppResult<Json<AttendanceListResponse>> {
    let month = match &filter.month {
        Some(raw) => Some(
            parse_month(raw)
                .ok_or_else(|| AppError::Validation("month must be YYYY-MM".to_string()))?,
        ),
        None => None,
    };

    let mut records = match &filter.employee {
        Some(username) => {
            sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance WHERE employee_username = $1 ORDER BY created_at DESC",
            )
            .bind(username)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as::<_, AttendanceRecord>(
                "SELECT * FROM attendance ORDER BY created_at DESC",
            )
            .fetch_all(&state.db)
            .await?
        }
    };

    if let Some((year, m)) = month {
        records.retain(|r| record_in_month(r, year, m));
    }

    let summary = summarize(&records);
    Ok(Json(AttendanceListResponse { records, summary }))
}

/// Submit a leave request; created PENDING, resolved by an admin
#[utoipa::path(
    post,
    path = "/api/v1/attendance/leave",
    request_body = SubmitLeaveRequest,
    responses(
        (status = 201, description = "Leave request submitted", body = AttendanceRecord),
        (status = 400, description = "Invalid date range, day count or reason"),
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn submit_leave(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<SubmitLeaveRequest>,
) -> AppResult<(StatusCode, Json<AttendanceRecord>)> {
    if body.reason.trim().is_empty() {
        return Err(AppError::Validation("A reason is required".to_string()));
    }
    if body.day_count < 1 {
        return Err(AppError::Validation(
            "dayCount must be at least 1".to_string(),
        ));
    }
    if body.leave_end < body.leave_start {
        return Err(AppError::Validation(
            "leaveEnd must not be before leaveStart".to_string(),
        ));
    }

    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"INSERT INTO attendance (
            id, employee_username, kind, leave_start, leave_end, day_count,
            reason, approval_status, created_at
        ) VALUES ($1, $2, 'leave', $3, $4, $5, $6, 'pending', NOW())
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.employee_username)
    .bind(body.leave_start)
    .bind(body.leave_end)
    .bind(body.day_count)
    .bind(body.reason.trim())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// Approve or reject a leave request. Resolution is terminal.
#[utoipa::path(
    put,
    path = "/api/v1/attendance/leave/{leave_id}",
    request_body = ResolveLeaveRequest,
    params(("leave_id" = Uuid, Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Leave resolved", body = AttendanceRecord),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Already resolved"),
    ),
    security(("bearer_auth" = [])),
    tag = "Attendance"
)]
pub async fn resolve_leave(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(leave_id): Path<Uuid>,
    Json(body): Json<ResolveLeaveRequest>,
) -> AppResult<Json<AttendanceRecord>> {
    auth.require_admin()?;

    if body.approval_status == ApprovalStatus::Pending {
        return Err(AppError::Validation(
            "approvalStatus must be APPROVED or REJECTED".to_string(),
        ));
    }

    let current = sqlx::query_as::<_, AttendanceRecord>(
        "SELECT * FROM attendance WHERE id = $1 AND kind = 'leave'",
    )
    .bind(leave_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Leave request".to_string()))?;

    if current.approval_status != Some(ApprovalStatus::Pending) {
        return Err(AppError::Conflict(
            "Leave request has already been resolved".to_string(),
        ));
    }

    let record = sqlx::query_as::<_, AttendanceRecord>(
        r#"UPDATE attendance SET approval_status = $2, updated_at = NOW()
           WHERE id = $1
           RETURNING *"#,
    )
    .bind(leave_id)
    .bind(body.approval_status)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(record))
}
