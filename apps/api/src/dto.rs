//! Response shapes specific to the HTTP layer.
//!
//! The entities themselves live in billing-core; this module only adds the
//! composed and message-style response bodies.

use serde::{Deserialize, Serialize};

use billing_core::{Invoice, InvoiceItem};

/// GET /invoices/{id} response: the header fields flattened at the top level
/// plus the line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDetail {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}

/// POST /invoices response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedInvoice {
    pub invoice_id: i64,
}

/// Short confirmation body for invoice update/delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// GET /health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
