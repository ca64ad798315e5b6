// src/handlers/task.rs

use crate::{
    auth::AuthUser,
    errors::{AppError, AppResult},
    models::{
        AssignmentType, CreateTaskRequest, SalaryType, TakeTaskRequest, Task, TaskStatus,
        UpdateTaskRequest,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

/// List all tasks
#[utoipa::path(
    get,
    path = "/api/v1/tasks",
    responses(
        (status = 200, description = "All tasks", body = Vec<Task>),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn list_tasks(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(tasks))
}

/// Create a task. DIRECT tasks must name an assignee; OPEN tasks start
/// unassigned and are restricted to project-based employees.
#[utoipa::path(
    post,
    path = "/api/v1/tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = Task),
        (status = 400, description = "Missing client/project name, or DIRECT task without an assignee"),
        (status = 403, description = "Admin privileges required"),
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    auth.require_admin()?;

    if body.client_name.is_empty() || body.project_name.is_empty() {
        return Err(AppError::Validation(
            "clientName and projectName are required".to_string(),
        ));
    }

    let assignment_type = body.assignment_type.unwrap_or(AssignmentType::Direct);

    let (employee_username, allowed_salary_type) = match assignment_type {
        AssignmentType::Direct => {
            let assignee = body
                .employee_username
                .filter(|u| !u.is_empty())
                .ok_or_else(|| {
                    AppError::Validation("employeeUsername is required for a DIRECT task".to_string())
                })?;
            (Some(assignee), None)
        }
        AssignmentType::Open => (None, Some(SalaryType::ProjectBased)),
    };

    let task = sqlx::query_as::<_, Task>(
        r#"INSERT INTO tasks (
            id, client_name, project_name, assignment_type, employee_username,
            allowed_salary_type, work_given_date, due_date, status,
            payment_amount, employee_earning, gst_applied, folder_path, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending', $9, $10, $11, $12, NOW())
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.client_name)
    .bind(&body.project_name)
    .bind(assignment_type)
    .bind(employee_username)
    .bind(allowed_salary_type)
    .bind(body.work_given_date.unwrap_or_else(|| Utc::now().date_naive()))
    .bind(body.due_date)
    .bind(body.payment_amount.unwrap_or(Decimal::ZERO))
    .bind(body.employee_earning.unwrap_or(Decimal::ZERO))
    .bind(body.gst_applied.unwrap_or(false))
    .bind(body.folder_path.as_deref().unwrap_or(""))
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Update a task. Completing a task requires a work-done date.
#[utoipa::path(
    put,
    path = "/api/v1/tasks/{task_id}",
    request_body = UpdateTaskRequest,
    params(("task_id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task updated", body = Task),
        (status = 400, description = "Completion without a work-done date"),
        (status = 404, description = "Task not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn update_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
    Json(body): Json<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    let current = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
        .bind(task_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Task".to_string()))?;

    if body.status == Some(TaskStatus::Completed)
        && body.work_done_date.is_none()
        && current.work_done_date.is_none()
    {
        return Err(AppError::Validation(
            "workDoneDate is required to complete a task".to_string(),
        ));
    }

    let task = sqlx::query_as::<_, Task>(
        r#"UPDATE tasks SET
            client_name = COALESCE($2, client_name),
            project_name = COALESCE($3, project_name),
            employee_username = COALESCE($4, employee_username),
            due_date = COALESCE($5, due_date),
            work_done_date = COALESCE($6, work_done_date),
            status = COALESCE($7, status),
            payment_amount = COALESCE($8, payment_amount),
            employee_earning = COALESCE($9, employee_earning),
            payment_received = COALESCE($10, payment_received),
            gst_applied = COALESCE($11, gst_applied),
            sent_to_ca = COALESCE($12, sent_to_ca),
            ca_payment_done = COALESCE($13, ca_payment_done),
            folder_path = COALESCE($14, folder_path),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *"#,
    )
    .bind(task_id)
    .bind(body.client_name)
    .bind(body.project_name)
    .bind(body.employee_username)
    .bind(body.due_date)
    .bind(body.work_done_date)
    .bind(body.status)
    .bind(body.payment_amount)
    .bind(body.employee_earning)
    .bind(body.payment_received)
    .bind(body.gst_applied)
    .bind(body.sent_to_ca)
    .bind(body.ca_payment_done)
    .bind(body.folder_path)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/api/v1/tasks/{task_id}",
    params(("task_id" = Uuid, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted"),
        (status = 404, description = "Task not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn delete_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(task_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(task_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task".to_string()));
    }

    Ok(Json(serde_json::json!({ "success": true, "deletedId": task_id })))
}

/// List OPEN tasks nobody has claimed yet
#[utoipa::path(
    get,
    path = "/api/v1/tasks/open",
    responses((status = 200, description = "Unclaimed OPEN tasks", body = Vec<Task>)),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn open_tasks(_auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = sqlx::query_as::<_, Task>(
        r#"SELECT * FROM tasks
           WHERE assignment_type = 'open' AND employee_username IS NULL
           ORDER BY created_at DESC"#,
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(tasks))
}

/// List tasks assigned to one employee
#[utoipa::path(
    get,
    path = "/api/v1/tasks/employee/{username}",
    params(("username" = String, Path, description = "Employee username")),
    responses((status = 200, description = "Employee's tasks", body = Vec<Task>)),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn employee_tasks(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks WHERE employee_username = $1 ORDER BY created_at DESC",
    )
    .bind(&username)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(tasks))
}

/// Claim an OPEN task. The assignment is a single conditional update, so
/// concurrent claims cannot both succeed: whoever lands first wins and the
/// loser gets a 409.
#[utoipa::path(
    post,
    path = "/api/v1/tasks/take",
    request_body = TakeTaskRequest,
    responses(
        (status = 200, description = "Task claimed", body = Task),
        (status = 404, description = "Task not found"),
        (status = 409, description = "Task already taken"),
    ),
    security(("bearer_auth" = [])),
    tag = "Tasks"
)]
pub async fn take_task(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<TakeTaskRequest>,
) -> AppResult<Json<Task>> {
    if body.employee_username.is_empty() {
        return Err(AppError::Validation(
            "employeeUsername is required".to_string(),
        ));
    }

    let claimed = sqlx::query_as::<_, Task>(
        r#"UPDATE tasks SET
            employee_username = $2,
            assignment_type = 'direct',
            status = 'pending',
            updated_at = NOW()
        WHERE id = $1 AND employee_username IS NULL
        RETURNING *"#,
    )
    .bind(body.task_id)
    .bind(&body.employee_username)
    .fetch_optional(&state.db)
    .await?;

    match claimed {
        Some(task) => Ok(Json(task)),
        None => {
            // Zero rows: either the task is gone or someone beat us to it.
            let exists = sqlx::query_scalar::<_, Uuid>("SELECT id FROM tasks WHERE id = $1")
                .bind(body.task_id)
                .fetch_optional(&state.db)
                .await?;

            match exists {
                Some(_) => Err(AppError::Conflict("Task already taken".to_string())),
                None => Err(AppError::NotFound("Task".to_string())),
            }
        }
    }
}
