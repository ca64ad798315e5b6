// src/handlers/analytics.rs

use crate::{
    auth::AuthUser,
    errors::AppResult,
    models::{CompanyAnalytics, EmployeeAnalytics, GrowthPoint, Task},
    services::analytics,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;

/// Company-wide totals, revenue and month-over-month growth
#[utoipa::path(
    get,
    path = "/api/v1/analytics/company",
    responses((status = 200, description = "Company analytics", body = CompanyAnalytics)),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn company_analytics(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<CompanyAnalytics>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks")
        .fetch_all(&state.db)
        .await?;

    let employee_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(&state.db)
        .await?;

    Ok(Json(analytics::company_analytics(
        &tasks,
        employee_count as u32,
        Utc::now(),
    )))
}

/// Task and revenue rollups for one employee
#[utoipa::path(
    get,
    path = "/api/v1/analytics/employee/{username}",
    params(("username" = String, Path, description = "Employee username")),
    responses((status = 200, description = "Employee analytics", body = EmployeeAnalytics)),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn employee_analytics(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<EmployeeAnalytics>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE employee_username = $1")
        .bind(&username)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(analytics::employee_analytics(&tasks)))
}

/// Completed tasks per month for one employee, oldest month first
#[utoipa::path(
    get,
    path = "/api/v1/analytics/employee/{username}/growth",
    params(("username" = String, Path, description = "Employee username")),
    responses((status = 200, description = "Growth series", body = Vec<GrowthPoint>)),
    security(("bearer_auth" = [])),
    tag = "Analytics"
)]
pub async fn employee_growth(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<GrowthPoint>>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE employee_username = $1")
        .bind(&username)
        .fetch_all(&state.db)
        .await?;

    Ok(Json(analytics::growth_series(&tasks)))
}
