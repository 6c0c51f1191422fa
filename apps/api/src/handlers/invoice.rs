//! Handlers for the /invoices endpoints.
//!
//! The write paths delegate to the transactional invoice repository; a
//! success here means the whole header + line set committed.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use billing_core::{Invoice, NewInvoice};

use crate::dto::{CreatedInvoice, InvoiceDetail, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

use super::bad_payload;

/// GET /invoices
pub async fn list_invoices(
    State(state): State<AppState>,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = state.db.invoices().list().await?;
    Ok(Json(invoices))
}

/// GET /invoices/{id}
///
/// Composes the header and its line items from two reads. Not transactional:
/// a concurrent update/delete can interleave between them, which the system
/// tolerates.
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<InvoiceDetail>, ApiError> {
    let repo = state.db.invoices();

    let invoice = repo
        .get(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Invoice not found".to_string()))?;
    let items = repo.items_for(id).await?;

    Ok(Json(InvoiceDetail { invoice, items }))
}

/// POST /invoices
pub async fn create_invoice(
    State(state): State<AppState>,
    body: Result<Json<NewInvoice>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedInvoice>), ApiError> {
    let Json(new_invoice) = body.map_err(bad_payload)?;

    let invoice_id = state.db.invoices().create(&new_invoice).await?;
    Ok((StatusCode::CREATED, Json(CreatedInvoice { invoice_id })))
}

/// PUT /invoices/{id}
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<NewInvoice>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(new_invoice) = body.map_err(bad_payload)?;

    state.db.invoices().update(id, &new_invoice).await?;
    Ok(Json(MessageResponse::new("Invoice updated")))
}

/// DELETE /invoices/{id}
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.db.invoices().delete(id).await?;
    Ok(Json(MessageResponse::new("Invoice deleted")))
}
