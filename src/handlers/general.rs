use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde_json::json;

/// Root handler — returns an HTML landing page with project info and links
pub async fn root_handler() -> impl IntoResponse {
    Html(r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>EMS API</title>
  <style>
    * { box-sizing: border-box; margin: 0; padding: 0; }
    body { font-family: 'Segoe UI', system-ui, sans-serif; background: #0f172a; color: #e2e8f0; min-height: 100vh; padding: 40px 20px; }
    .container { max-width: 860px; margin: 0 auto; }
    header { text-align: center; margin-bottom: 48px; }
    header h1 { font-size: 2.8rem; font-weight: 800; background: linear-gradient(135deg, #3b82f6, #8b5cf6); -webkit-background-clip: text; -webkit-text-fill-color: transparent; margin-bottom: 8px; }
    header p { color: #94a3b8; font-size: 1.1rem; }
    .badge { display: inline-block; background: #1e293b; border: 1px solid #334155; color: #38bdf8; padding: 4px 12px; border-radius: 20px; font-size: 0.8rem; margin-top: 12px; }
    .routes { background: #1e293b; border: 1px solid #334155; border-radius: 12px; padding: 24px; }
    .routes h2 { font-size: 1.2rem; font-weight: 700; color: #f1f5f9; margin-bottom: 16px; }
    .route-group { margin-bottom: 20px; }
    .route-group h4 { font-size: 0.8rem; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: #64748b; margin-bottom: 8px; }
    .route-item { display: flex; align-items: flex-start; gap: 12px; padding: 8px 0; border-bottom: 1px solid #0f172a; }
    .route-item:last-child { border-bottom: none; }
    .method { font-size: 0.7rem; font-weight: 700; padding: 2px 8px; border-radius: 4px; min-width: 52px; text-align: center; font-family: monospace; }
    .get { background: #064e3b; color: #34d399; }
    .post { background: #1e3a5f; color: #60a5fa; }
    .put, .patch { background: #451a03; color: #fb923c; }
    .delete { background: #4c0519; color: #fb7185; }
    .route-path { font-family: monospace; font-size: 0.85rem; color: #e2e8f0; flex: 1; }
    .route-desc { font-size: 0.8rem; color: #64748b; }
    footer { text-align: center; margin-top: 40px; color: #475569; font-size: 0.85rem; }
  </style>
</head>
<body>
<div class="container">
  <header>
    <h1>EMS API</h1>
    <p>Employee management, task tracking, attendance &amp; invoicing</p>
    <span class="badge">v1.0.0 · REST API · JSON · <a href="/docs" style="color:#38bdf8">Swagger UI</a></span>
  </header>

  <div class="routes">
    <h2>All API Routes</h2>

    <div class="route-group">
      <h4>Auth</h4>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/auth/login</span><span class="route-desc">Login and get a JWT token</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/auth/me</span><span class="route-desc">Current user from token</span></div>
    </div>

    <div class="route-group">
      <h4>Employees</h4>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/employees</span><span class="route-desc">List employees</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/employees</span><span class="route-desc">Create an employee (admin)</span></div>
      <div class="route-item"><span class="method put">PUT</span><span class="route-path">/api/v1/employees/:id</span><span class="route-desc">Update an employee (admin)</span></div>
      <div class="route-item"><span class="method delete">DELETE</span><span class="route-path">/api/v1/employees/:id</span><span class="route-desc">Delete an employee (admin, Admin rows protected)</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/employees/profile</span><span class="route-desc">Own profile by username</span></div>
      <div class="route-item"><span class="method put">PUT</span><span class="route-path">/api/v1/employees/profile</span><span class="route-desc">Update own profile</span></div>
    </div>

    <div class="route-group">
      <h4>Tasks</h4>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/tasks</span><span class="route-desc">All tasks</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/tasks</span><span class="route-desc">Create a DIRECT or OPEN task (admin)</span></div>
      <div class="route-item"><span class="method put">PUT</span><span class="route-path">/api/v1/tasks/:id</span><span class="route-desc">Update a task</span></div>
      <div class="route-item"><span class="method delete">DELETE</span><span class="route-path">/api/v1/tasks/:id</span><span class="route-desc">Delete a task</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/tasks/open</span><span class="route-desc">Unclaimed OPEN tasks</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/tasks/employee/:username</span><span class="route-desc">Tasks for one employee</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/tasks/take</span><span class="route-desc">Atomically claim an OPEN task</span></div>
    </div>

    <div class="route-group">
      <h4>Attendance &amp; Leave</h4>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/attendance</span><span class="route-desc">Mark today's attendance</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/attendance</span><span class="route-desc">Records + monthly summary</span></div>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/attendance/leave</span><span class="route-desc">Submit a leave request</span></div>
      <div class="route-item"><span class="method put">PUT</span><span class="route-path">/api/v1/attendance/leave/:id</span><span class="route-desc">Approve/reject leave (admin)</span></div>
    </div>

    <div class="route-group">
      <h4>Resignations</h4>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/resignations</span><span class="route-desc">Submit a resignation</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/resignations</span><span class="route-desc">All, or one user's history</span></div>
      <div class="route-item"><span class="method patch">PATCH</span><span class="route-path">/api/v1/resignations/:id</span><span class="route-desc">Approve/reject (admin)</span></div>
    </div>

    <div class="route-group">
      <h4>Invoices</h4>
      <div class="route-item"><span class="method post">POST</span><span class="route-path">/api/v1/invoices</span><span class="route-desc">Create an invoice (admin)</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/invoices</span><span class="route-desc">List invoices (paid / sent-to-CA filters)</span></div>
      <div class="route-item"><span class="method patch">PATCH</span><span class="route-path">/api/v1/invoices/:id</span><span class="route-desc">Update flags and client fields</span></div>
      <div class="route-item"><span class="method delete">DELETE</span><span class="route-path">/api/v1/invoices/:id</span><span class="route-desc">Delete an invoice</span></div>
    </div>

    <div class="route-group">
      <h4>Analytics</h4>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/analytics/company</span><span class="route-desc">Company revenue &amp; growth</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/analytics/employee/:username</span><span class="route-desc">Per-employee rollups</span></div>
      <div class="route-item"><span class="method get">GET</span><span class="route-path">/api/v1/analytics/employee/:username/growth</span><span class="route-desc">Completed tasks per month</span></div>
    </div>
  </div>

  <footer>
    <p>Built with Rust · Axum · SQLx</p>
  </footer>
</div>
</body>
</html>"#)
}

/// Health check endpoint
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "database": "connected",
                "service": "ems-api",
                "version": "1.0.0"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "database": "disconnected",
                "error": e.to_string()
            })),
        ),
    }
}
