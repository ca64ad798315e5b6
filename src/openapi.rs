// src/openapi.rs

use crate::models::{
    ApprovalStatus, AssignmentType, AttendanceKind, AttendanceListResponse, AttendanceRecord,
    AttendanceSummary, AuthResponse, CompanyAnalytics, CompanyRevenue, CreateEmployeeRequest,
    CreateInvoiceRequest, CreateTaskRequest, DayStatus, EmployeePublic, EmployeeAnalytics,
    GrowthPoint, Invoice, LoginRequest, MarkAttendanceRequest, MonthBucket, Resignation,
    ResolveLeaveRequest, ResolveResignationRequest, Role, SalaryType, SubmitLeaveRequest,
    SubmitResignationRequest, TakeTaskRequest, Task, TaskStatus, TasksByStatus,
    UpdateEmployeeRequest, UpdateInvoiceRequest, UpdateProfileRequest, UpdateTaskRequest,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EMS API",
        version = "1.0.0",
        description = "Employee Management System API built with Rust and Axum. \
            Covers employee records, DIRECT/OPEN task assignment with atomic claiming, \
            attendance and leave tracking, the resignation workflow with its rejection \
            cooldown, GST invoicing, and revenue analytics.",
        license(name = "MIT")
    ),
    paths(
        // Auth
        crate::handlers::auth::login,
        crate::handlers::auth::me,
        // Employees
        crate::handlers::employee::list_employees,
        crate::handlers::employee::create_employee,
        crate::handlers::employee::update_employee,
        crate::handlers::employee::delete_employee,
        crate::handlers::employee::get_profile,
        crate::handlers::employee::update_profile,
        // Tasks
        crate::handlers::task::list_tasks,
        crate::handlers::task::create_task,
        crate::handlers::task::update_task,
        crate::handlers::task::delete_task,
        crate::handlers::task::open_tasks,
        crate::handlers::task::employee_tasks,
        crate::handlers::task::take_task,
        // Attendance
        crate::handlers::attendance::mark_attendance,
        crate::handlers::attendance::list_attendance,
        crate::handlers::attendance::submit_leave,
        crate::handlers::attendance::resolve_leave,
        // Resignations
        crate::handlers::resignation::submit_resignation,
        crate::handlers::resignation::list_resignations,
        crate::handlers::resignation::resolve_resignation,
        // Invoices
        crate::handlers::invoice::create_invoice,
        crate::handlers::invoice::list_invoices,
        crate::handlers::invoice::update_invoice,
        crate::handlers::invoice::delete_invoice,
        // Analytics
        crate::handlers::analytics::company_analytics,
        crate::handlers::analytics::employee_analytics,
        crate::handlers::analytics::employee_growth,
    ),
    components(
        schemas(
            Role, SalaryType, AssignmentType, TaskStatus, AttendanceKind, DayStatus,
            ApprovalStatus,
            LoginRequest, AuthResponse, EmployeePublic,
            CreateEmployeeRequest, UpdateEmployeeRequest, UpdateProfileRequest,
            Task, CreateTaskRequest, UpdateTaskRequest, TakeTaskRequest,
            AttendanceRecord, MarkAttendanceRequest, SubmitLeaveRequest, ResolveLeaveRequest,
            AttendanceSummary, AttendanceListResponse,
            Resignation, SubmitResignationRequest, ResolveResignationRequest,
            Invoice, CreateInvoiceRequest, UpdateInvoiceRequest,
            CompanyAnalytics, CompanyRevenue, TasksByStatus, EmployeeAnalytics, MonthBucket,
            GrowthPoint,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "Auth", description = "Login and token introspection"),
        (name = "Employees", description = "Employee records and profiles"),
        (name = "Tasks", description = "DIRECT and OPEN tasks, claiming and lifecycle"),
        (name = "Attendance", description = "Daily attendance and leave requests"),
        (name = "Resignations", description = "Resignation workflow with rejection cooldown"),
        (name = "Invoices", description = "GST invoicing for the CA workflow"),
        (name = "Analytics", description = "Company and per-employee reporting"),
    )
)]
pub struct ApiDoc;
