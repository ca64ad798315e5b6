// src/handlers/employee.rs

use crate::{
    auth::AuthUser,
    errors::{AppError, AppResult},
    models::{
        CreateEmployeeRequest, Employee, EmployeePublic, ProfileQuery, Role, SalaryType,
        UpdateEmployeeRequest, UpdateProfileRequest,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use bcrypt::{DEFAULT_COST, hash};
use chrono::Utc;
use uuid::Uuid;

const DEFAULT_PASSWORD: &str = "Emp@123";

/// List all employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "List of employees", body = Vec<EmployeePublic>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn list_employees(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmployeePublic>>> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeePublic),
        (status = 403, description = "Admin privileges required"),
        (status = 409, description = "Username or email already exists"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn create_employee(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<EmployeePublic>)> {
    auth.require_admin()?;

    if body.username.is_empty() || body.email.is_empty() {
        return Err(AppError::Validation(
            "Username and email are required".to_string(),
        ));
    }

    let existing = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM employees WHERE username = $1 OR email = $2",
    )
    .bind(&body.username)
    .bind(&body.email)
    .fetch_optional(&state.db)
    .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "Employee with this username or email already exists".to_string(),
        ));
    }

    let password = body.password.as_deref().unwrap_or(DEFAULT_PASSWORD);
    let password_hash =
        hash(password, DEFAULT_COST).map_err(|e| AppError::Internal(e.to_string()))?;

    let employee = sqlx::query_as::<_, Employee>(
        r#"INSERT INTO employees (
            id, username, email, password_hash, role, department, salary_type,
            join_date, profile_completed, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, false, NOW())
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.username)
    .bind(&body.email)
    .bind(&password_hash)
    .bind(body.role.unwrap_or(Role::Employee))
    .bind(body.department.as_deref().unwrap_or("General"))
    .bind(body.salary_type.unwrap_or(SalaryType::Salary))
    .bind(body.join_date.unwrap_or_else(|| Utc::now().date_naive()))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/v1/employees/{employee_id}",
    request_body = UpdateEmployeeRequest,
    params(("employee_id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee updated", body = EmployeePublic),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Username or email already exists"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn update_employee(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Json(body): Json<UpdateEmployeeRequest>,
) -> AppResult<Json<EmployeePublic>> {
    auth.require_admin()?;

    if body.username.is_some() || body.email.is_some() {
        let duplicate = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM employees WHERE id != $1 AND (username = $2 OR email = $3)",
        )
        .bind(employee_id)
        .bind(body.username.as_deref().unwrap_or(""))
        .bind(body.email.as_deref().unwrap_or(""))
        .fetch_optional(&state.db)
        .await?;

        if duplicate.is_some() {
            return Err(AppError::Conflict(
                "Email or username already exists".to_string(),
            ));
        }
    }

    let employee = sqlx::query_as::<_, Employee>(
        r#"UPDATE employees SET
            username = COALESCE($2, username),
            email = COALESCE($3, email),
            department = COALESCE($4, department),
            salary_type = COALESCE($5, salary_type),
            role = COALESCE($6, role),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *"#,
    )
    .bind(employee_id)
    .bind(body.username)
    .bind(body.email)
    .bind(body.department)
    .bind(body.salary_type)
    .bind(body.role)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

    Ok(Json(employee.into()))
}

/// Delete an employee. Admin accounts cannot be deleted.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{employee_id}",
    params(("employee_id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Deleted employee (without password)", body = EmployeePublic),
        (status = 403, description = "Cannot delete an admin account"),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn delete_employee(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
) -> AppResult<Json<EmployeePublic>> {
    auth.require_admin()?;

    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(employee_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

    if employee.role == Role::Admin {
        return Err(AppError::Forbidden(
            "Cannot delete admin account".to_string(),
        ));
    }

    sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(employee_id)
        .execute(&state.db)
        .await?;

    Ok(Json(employee.into()))
}

/// Fetch a profile by username
#[utoipa::path(
    get,
    path = "/api/v1/employees/profile",
    params(ProfileQuery),
    responses(
        (status = 200, description = "Employee profile", body = EmployeePublic),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn get_profile(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> AppResult<Json<EmployeePublic>> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE username = $1")
        .bind(&query.username)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

    Ok(Json(employee.into()))
}

/// Update a profile; marks it completed
#[utoipa::path(
    put,
    path = "/api/v1/employees/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = EmployeePublic),
        (status = 404, description = "Employee not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
pub async fn update_profile(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<EmployeePublic>> {
    let employee = sqlx::query_as::<_, Employee>(
        r#"UPDATE employees SET
            phone = COALESCE($2, phone),
            address = COALESCE($3, address),
            department = COALESCE($4, department),
            profile_completed = true,
            updated_at = NOW()
        WHERE username = $1
        RETURNING *"#,
    )
    .bind(&body.username)
    .bind(body.phone)
    .bind(body.address)
    .bind(body.department)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Employee".to_string()))?;

    Ok(Json(employee.into()))
}
