// src/models/mod.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// ─── Enums ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "employee_role", rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
    #[serde(rename = "CA")]
    Ca,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "salary_type", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryType {
    Salary,
    ProjectBased,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "assignment_type", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentType {
    Direct,
    Open,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "task_status", rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "attendance_kind", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttendanceKind {
    Attendance,
    Leave,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "day_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    Full,
    Half,
    Absent,
}

/// Shared by leave requests and resignations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, ToSchema, PartialEq, Eq)]
#[sqlx(type_name = "approval_status", rename_all = "snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

// ─── Employee ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Employee {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    pub department: String,
    pub salary_type: SalaryType,
    pub join_date: NaiveDate,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Employee representation safe to return to any caller.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeePublic {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    pub salary_type: SalaryType,
    pub join_date: NaiveDate,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeePublic {
    fn from(e: Employee) -> Self {
        EmployeePublic {
            id: e.id,
            username: e.username,
            email: e.email,
            role: e.role,
            department: e.department,
            salary_type: e.salary_type,
            join_date: e.join_date,
            phone: e.phone,
            address: e.address,
            profile_completed: e.profile_completed,
            created_at: e.created_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub email: String,
    /// Defaults to "Emp@123" when omitted; the employee changes it later.
    pub password: Option<String>,
    pub role: Option<Role>,
    pub department: Option<String>,
    pub salary_type: Option<SalaryType>,
    pub join_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub salary_type: Option<SalaryType>,
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ProfileQuery {
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub user: EmployeePublic,
}

// ─── Task ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Task {
    pub id: Uuid,
    pub client_name: String,
    pub project_name: String,
    pub assignment_type: AssignmentType,
    /// Username of the assignee; None while an OPEN task is unclaimed.
    pub employee_username: Option<String>,
    pub allowed_salary_type: Option<SalaryType>,
    pub work_given_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub work_done_date: Option<NaiveDate>,
    pub status: TaskStatus,
    pub payment_amount: Decimal,
    pub employee_earning: Decimal,
    pub payment_received: bool,
    pub gst_applied: bool,
    pub sent_to_ca: bool,
    pub ca_payment_done: bool,
    pub folder_path: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    pub client_name: String,
    pub project_name: String,
    pub assignment_type: Option<AssignmentType>,
    pub employee_username: Option<String>,
    pub work_given_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub payment_amount: Option<Decimal>,
    pub employee_earning: Option<Decimal>,
    pub gst_applied: Option<bool>,
    pub folder_path: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTaskRequest {
    pub client_name: Option<String>,
    pub project_name: Option<String>,
    pub employee_username: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub work_done_date: Option<NaiveDate>,
    pub status: Option<TaskStatus>,
    pub payment_amount: Option<Decimal>,
    pub employee_earning: Option<Decimal>,
    pub payment_received: Option<bool>,
    pub gst_applied: Option<bool>,
    pub sent_to_ca: Option<bool>,
    pub ca_payment_done: Option<bool>,
    pub folder_path: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TakeTaskRequest {
    pub task_id: Uuid,
    pub employee_username: String,
}

// ─── Invoice ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub bill_date: NaiveDate,
    pub client_name: String,
    pub client_gst: String,
    pub client_address: String,
    pub amount: Decimal,
    pub gst_applied: bool,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub total_amount: Decimal,
    pub task_ids: Vec<Uuid>,
    pub paid: bool,
    pub paid_at: Option<DateTime<Utc>>,
    pub sent_to_ca: bool,
    pub sent_to_ca_at: Option<DateTime<Utc>>,
    pub ca_paid: bool,
    pub ca_paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvoiceRequest {
    pub invoice_number: String,
    pub bill_date: Option<NaiveDate>,
    pub client_name: String,
    pub client_gst: String,
    pub client_address: String,
    pub amount: Decimal,
    pub gst_applied: Option<bool>,
    pub task_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateInvoiceRequest {
    pub client_name: Option<String>,
    pub client_gst: Option<String>,
    pub client_address: Option<String>,
    pub paid: Option<bool>,
    pub sent_to_ca: Option<bool>,
    pub ca_paid: Option<bool>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct InvoiceFilter {
    pub paid: Option<bool>,
    pub sent_to_ca: Option<bool>,
}

// ─── Attendance & Leave ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub employee_username: String,
    pub kind: AttendanceKind,
    pub work_date: Option<NaiveDate>,
    pub day_status: Option<DayStatus>,
    pub leave_start: Option<NaiveDate>,
    pub leave_end: Option<NaiveDate>,
    pub day_count: Option<i32>,
    pub reason: Option<String>,
    pub approval_status: Option<ApprovalStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkAttendanceRequest {
    pub employee_username: String,
    pub status: DayStatus,
    /// Re-verified against the stored hash on every mark.
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitLeaveRequest {
    pub employee_username: String,
    pub leave_start: NaiveDate,
    pub leave_end: NaiveDate,
    pub day_count: i32,
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveLeaveRequest {
    pub approval_status: ApprovalStatus,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct AttendanceFilter {
    pub employee: Option<String>,
    /// "YYYY-MM"
    pub month: Option<String>,
}

/// Per-employee rollup for one listing window.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct AttendanceSummary {
    pub employee_username: String,
    pub full_days: u32,
    pub half_days: u32,
    pub absent_days: u32,
    pub approved_leave_days: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub records: Vec<AttendanceRecord>,
    pub summary: Vec<AttendanceSummary>,
}

// ─── Resignation ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resignation {
    pub id: Uuid,
    pub username: String,
    pub submitted_at: DateTime<Utc>,
    pub last_working_day: NaiveDate,
    pub reason: String,
    pub status: ApprovalStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitResignationRequest {
    pub username: String,
    pub last_working_day: NaiveDate,
    pub reason: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResolveResignationRequest {
    pub status: ApprovalStatus,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ResignationFilter {
    pub username: Option<String>,
}

// ─── Analytics ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct TasksByStatus {
    pub completed: u32,
    pub in_progress: u32,
    pub pending: u32,
    pub on_hold: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct CompanyRevenue {
    pub current_month_revenue: Decimal,
    pub last_month_revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct CompanyAnalytics {
    pub total_tasks: u32,
    pub total_tasks_completed: u32,
    pub total_revenue: Decimal,
    pub gst_applied: u32,
    pub sent_to_ca: u32,
    pub ca_payment_done: u32,
    pub employee_count: u32,
    pub tasks_by_status: TasksByStatus,
    pub growth_percentage: Decimal,
    pub company_revenue: CompanyRevenue,
}

/// Completed/pending split for one calendar month of the current year.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct MonthBucket {
    pub month: String,
    pub completed: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, ToSchema)]
pub struct EmployeeAnalytics {
    pub tasks_completed: u32,
    pub tasks_pending: u32,
    pub total_tasks: u32,
    pub total_revenue: Decimal,
    pub tasks_by_status: TasksByStatus,
    pub tasks_by_month: Vec<MonthBucket>,
}

/// One point of the completed-tasks-per-month growth series.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, ToSchema)]
pub struct GrowthPoint {
    pub month: String,
    pub tasks: u32,
}

// ─── JWT Claims ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub role: Role,
    pub exp: usize,
    pub iat: usize,
}
