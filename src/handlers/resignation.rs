// src/handlers/resignation.rs

use crate::{
    auth::AuthUser,
    errors::{AppError, AppResult},
    models::{
        Resignation, ResignationFilter, ResolveResignationRequest, SubmitResignationRequest,
    },
    services::resignation::{Denial, check_eligibility},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// Submit a resignation request
#[utoipa::path(
    post,
    path = "/api/v1/resignations",
    request_body = SubmitResignationRequest,
    responses(
        (status = 201, description = "Resignation submitted", body = Resignation),
        (status = 400, description = "Missing fields or an active request already exists"),
        (status = 403, description = "Rejection cooldown still active"),
    ),
    security(("bearer_auth" = [])),
    tag = "Resignations"
)]
pub async fn submit_resignation(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<SubmitResignationRequest>,
) -> AppResult<(StatusCode, Json<Resignation>)> {
    if body.username.is_empty() || body.reason.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let history = sqlx::query_as::<_, Resignation>(
        "SELECT * FROM resignations WHERE username = $1 ORDER BY submitted_at DESC",
    )
    .bind(&body.username)
    .fetch_all(&state.db)
    .await?;

    check_eligibility(&history, Utc::now()).map_err(|denial| match denial {
        Denial::ActiveRequest => AppError::Validation(
            "You already have an active or approved resignation request.".to_string(),
        ),
        Denial::Cooldown { days_remaining } => AppError::CooldownActive(days_remaining),
    })?;

    let resignation = sqlx::query_as::<_, Resignation>(
        r#"INSERT INTO resignations (id, username, submitted_at, last_working_day, reason, status, created_at)
        VALUES ($1, $2, NOW(), $3, $4, 'pending', NOW())
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.username)
    .bind(body.last_working_day)
    .bind(body.reason.trim())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(resignation)))
}

/// All resignations, or one user's history when `username` is given
#[utoipa::path(
    get,
    path = "/api/v1/resignations",
    params(ResignationFilter),
    responses((status = 200, description = "Resignations, newest first", body = Vec<Resignation>)),
    security(("bearer_auth" = [])),
    tag = "Resignations"
)]
pub async fn list_resignations(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<ResignationFilter>,
) -> AppResult<Json<Vec<Resignation>>> {
    let resignations = match &filter.username {
        Some(username) => {
            sqlx::query_as::<_, Resignation>(
                "SELECT * FROM resignations WHERE username = $1 ORDER BY submitted_at DESC",
            )
            .bind(username)
            .fetch_all(&state.db)
            .await?
        }
        None => {
            sqlx::query_as::<_, Resignation>(
                "SELECT * FROM resignations ORDER BY submitted_at DESC",
            )
            .fetch_all(&state.db)
            .await?
        }
    };

    Ok(Json(resignations))
}

/// Set a resignation's status
#[utoipa::path(
    patch,
    path = "/api/v1/resignations/{resignation_id}",
    request_body = ResolveResignationRequest,
    params(("resignation_id" = Uuid, Path, description = "Resignation ID")),
    responses(
        (status = 200, description = "Status updated", body = Resignation),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Resignation not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Resignations"
)]
pub async fn resolve_resignation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(resignation_id): Path<Uuid>,
    Json(body): Json<ResolveResignationRequest>,
) -> AppResult<Json<Resignation>> {
    auth.require_admin()?;

    let resignation = sqlx::query_as::<_, Resignation>(
        "UPDATE resignations SET status = $2 WHERE id = $1 RETURNING *",
    )
    .bind(resignation_id)
    .bind(body.status)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Resignation".to_string()))?;

    Ok(Json(resignation))
}
