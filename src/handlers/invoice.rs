// src/handlers/invoice.rs

use crate::{
    auth::AuthUser,
    errors::{AppError, AppResult},
    models::{CreateInvoiceRequest, Invoice, InvoiceFilter, UpdateInvoiceRequest},
    services::invoice::gst_components,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;

/// Create an invoice. GST invoices get 9% CGST + 9% SGST added on top of
/// the line amount; the total is never reconciled against the source tasks.
#[utoipa::path(
    post,
    path = "/api/v1/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 201, description = "Invoice created", body = Invoice),
        (status = 400, description = "Missing client details"),
        (status = 409, description = "Invoice number already exists"),
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn create_invoice(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<CreateInvoiceRequest>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    auth.require_admin()?;

    if body.invoice_number.is_empty()
        || body.client_name.is_empty()
        || body.client_gst.is_empty()
        || body.client_address.is_empty()
    {
        return Err(AppError::Validation(
            "invoiceNumber, clientName, clientGST and clientAddress are required".to_string(),
        ));
    }

    let existing =
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM invoices WHERE invoice_number = $1")
            .bind(&body.invoice_number)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(format!(
            "Invoice '{}' already exists",
            body.invoice_number
        )));
    }

    let gst_applied = body.gst_applied.unwrap_or(false);
    let (cgst, sgst, total) = gst_components(body.amount, gst_applied);

    let invoice = sqlx::query_as::<_, Invoice>(
        r#"INSERT INTO invoices (
            id, invoice_number, bill_date, client_name, client_gst, client_address,
            amount, gst_applied, cgst_amount, sgst_amount, total_amount, task_ids, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, NOW())
        RETURNING *"#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.invoice_number)
    .bind(body.bill_date.unwrap_or_else(|| Utc::now().date_naive()))
    .bind(&body.client_name)
    .bind(&body.client_gst)
    .bind(&body.client_address)
    .bind(body.amount)
    .bind(gst_applied)
    .bind(cgst)
    .bind(sgst)
    .bind(total)
    .bind(body.task_ids.unwrap_or_default())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(invoice)))
}

/// List invoices, optionally filtered by paid / sent-to-CA state
#[utoipa::path(
    get,
    path = "/api/v1/invoices",
    params(InvoiceFilter),
    responses((status = 200, description = "Invoices, newest first", body = Vec<Invoice>)),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn list_invoices(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(filter): Query<InvoiceFilter>,
) -> AppResult<Json<Vec<Invoice>>> {
    let invoices = sqlx::query_as::<_, Invoice>(
        r#"SELECT * FROM invoices
           WHERE ($1::BOOLEAN IS NULL OR paid = $1)
             AND ($2::BOOLEAN IS NULL OR sent_to_ca = $2)
           ORDER BY created_at DESC"#,
    )
    .bind(filter.paid)
    .bind(filter.sent_to_ca)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(invoices))
}

/// Update an invoice. Raising the paid / sent-to-CA / CA-paid flags stamps
/// the matching timestamp once.
#[utoipa::path(
    patch,
    path = "/api/v1/invoices/{invoice_id}",
    request_body = UpdateInvoiceRequest,
    params(("invoice_id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice updated", body = Invoice),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn update_invoice(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
    Json(body): Json<UpdateInvoiceRequest>,
) -> AppResult<Json<Invoice>> {
    let invoice = sqlx::query_as::<_, Invoice>(
        r#"UPDATE invoices SET
            client_name = COALESCE($2, client_name),
            client_gst = COALESCE($3, client_gst),
            client_address = COALESCE($4, client_address),
            paid_at = CASE WHEN COALESCE($5, false) AND NOT paid THEN NOW() ELSE paid_at END,
            paid = COALESCE($5, paid),
            sent_to_ca_at = CASE WHEN COALESCE($6, false) AND NOT sent_to_ca THEN NOW() ELSE sent_to_ca_at END,
            sent_to_ca = COALESCE($6, sent_to_ca),
            ca_paid_at = CASE WHEN COALESCE($7, false) AND NOT ca_paid THEN NOW() ELSE ca_paid_at END,
            ca_paid = COALESCE($7, ca_paid)
        WHERE id = $1
        RETURNING *"#,
    )
    .bind(invoice_id)
    .bind(body.client_name)
    .bind(body.client_gst)
    .bind(body.client_address)
    .bind(body.paid)
    .bind(body.sent_to_ca)
    .bind(body.ca_paid)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound("Invoice".to_string()))?;

    Ok(Json(invoice))
}

/// Delete an invoice
#[utoipa::path(
    delete,
    path = "/api/v1/invoices/{invoice_id}",
    params(("invoice_id" = Uuid, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice deleted"),
        (status = 404, description = "Invoice not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Invoices"
)]
pub async fn delete_invoice(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(invoice_id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(invoice_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Invoice".to_string()));
    }

    Ok(Json(serde_json::json!({ "success": true, "deletedId": invoice_id })))
}
