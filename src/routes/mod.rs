// src/routes/mod.rs

use crate::{
    handlers::{
        analytics::{company_analytics, employee_analytics, employee_growth},
        attendance::{list_attendance, mark_attendance, resolve_leave, submit_leave},
        auth::{login, me},
        employee::{
            create_employee, delete_employee, get_profile, list_employees, update_employee,
            update_profile,
        },
        invoice::{create_invoice, delete_invoice, list_invoices, update_invoice},
        resignation::{list_resignations, resolve_resignation, submit_resignation},
        task::{
            create_task, delete_task, employee_tasks, list_tasks, open_tasks, take_task,
            update_task,
        },
    },
    state::AppState,
};
use axum::{
    Router,
    routing::{get, patch, post, put},
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // ─── Auth ─────────────────────────────────────────────
        .route("/auth/login", post(login))
        .route("/auth/me", get(me))
        // ─── Employees ────────────────────────────────────────
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/profile", get(get_profile).put(update_profile))
        .route(
            "/employees/{employee_id}",
            put(update_employee).delete(delete_employee),
        )
        // ─── Tasks ────────────────────────────────────────────
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/open", get(open_tasks))
        .route("/tasks/take", post(take_task))
        .route("/tasks/employee/{username}", get(employee_tasks))
        .route("/tasks/{task_id}", put(update_task).delete(delete_task))
        // ─── Attendance & Leave ───────────────────────────────
        .route("/attendance", post(mark_attendance).get(list_attendance))
        .route("/attendance/leave", post(submit_leave))
        .route("/attendance/leave/{leave_id}", put(resolve_leave))
        // ─── Resignations ─────────────────────────────────────
        .route(
            "/resignations",
            post(submit_resignation).get(list_resignations),
        )
        .route("/resignations/{resignation_id}", patch(resolve_resignation))
        // ─── Invoices ─────────────────────────────────────────
        .route("/invoices", post(create_invoice).get(list_invoices))
        .route(
            "/invoices/{invoice_id}",
            patch(update_invoice).delete(delete_invoice),
        )
        // ─── Analytics ────────────────────────────────────────
        .route("/analytics/company", get(company_analytics))
        .route("/analytics/employee/{username}", get(employee_analytics))
        .route(
            "/analytics/employee/{username}/growth",
            get(employee_growth),
        )
}
