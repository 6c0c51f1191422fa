//! # Domain Types
//!
//! Core domain types for the billing backend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Domain Types                             │
//! │                                                                 │
//! │  ┌───────────────┐   ┌────────────────┐   ┌────────────────┐    │
//! │  │     Item      │   │    Invoice     │   │  InvoiceItem   │    │
//! │  │  ───────────  │   │  ────────────  │   │  ────────────  │    │
//! │  │  id           │   │  id            │   │  id            │    │
//! │  │  name         │   │  customer_name │   │  invoice_id    │    │
//! │  │  type         │   │  created_at    │   │  item_id       │    │
//! │  │  price        │   │  tax           │   │  quantity      │    │
//! │  │  image_url    │   │  total         │   │  price         │    │
//! │  └───────────────┘   └────────────────┘   └────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity ids are assigned by the store (SQLite AUTOINCREMENT). The `New*`
//! shapes are what clients submit before an id exists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Item
// =============================================================================

/// A menu item available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Item {
    /// Store-assigned identifier.
    pub id: i64,

    /// Display name shown on the menu and on invoices.
    pub name: String,

    /// Category, e.g. "pizza" or "drink". Serialized as `type` on the wire.
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub item_type: String,

    /// Current unit price.
    pub price: f64,

    /// URL of the item image shown in the frontend.
    pub image_url: String,
}

/// Fields for creating or fully replacing an item. No id: the store assigns
/// one on insert, and updates take the id from the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub price: f64,
    pub image_url: String,
}

// =============================================================================
// Invoice
// =============================================================================

/// An invoice header. Owns zero or more [`InvoiceItem`] line items.
///
/// `tax` and `total` are client-supplied and stored as-is; the server never
/// recomputes them from the line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Invoice {
    /// Store-assigned identifier.
    pub id: i64,

    pub customer_name: String,

    /// Set once at creation, immutable afterwards.
    pub created_at: DateTime<Utc>,

    pub tax: f64,

    pub total: f64,
}

/// A line item tied to one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct InvoiceItem {
    /// Store-assigned identifier. Reassigned on every invoice update because
    /// replacement deletes and reinserts the full line set.
    pub id: i64,

    /// Owning invoice.
    pub invoice_id: i64,

    /// The menu item this line came from. Not required to still exist.
    pub item_id: i64,

    pub quantity: i64,

    /// Unit price frozen at time of sale, independent of the current
    /// [`Item::price`], so historical invoices survive later price changes.
    pub price: f64,
}

/// A submitted line item, before the invoice it belongs to has an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoiceLine {
    pub item_id: i64,
    pub quantity: i64,
    pub price: f64,
}

/// Fields for creating an invoice, or fully replacing one on update.
/// Replacement semantics: the submitted `items` set replaces all prior lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_name: String,
    pub tax: f64,
    pub total: f64,
    pub items: Vec<NewInvoiceLine>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_serializes_as_type() {
        let item = Item {
            id: 1,
            name: "Margherita".to_string(),
            item_type: "pizza".to_string(),
            price: 9.5,
            image_url: "http://example.com/margherita.png".to_string(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "pizza");
        assert!(json.get("item_type").is_none());
    }

    #[test]
    fn new_invoice_deserializes_submitted_payload() {
        let payload = r#"{
            "customer_name": "Alice",
            "tax": 1.5,
            "total": 21.5,
            "items": [{"item_id": 3, "quantity": 2, "price": 10}]
        }"#;

        let invoice: NewInvoice = serde_json::from_str(payload).unwrap();
        assert_eq!(invoice.customer_name, "Alice");
        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].item_id, 3);
        assert_eq!(invoice.items[0].quantity, 2);
        assert!((invoice.items[0].price - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invoice_round_trips_through_json() {
        let invoice = Invoice {
            id: 7,
            customer_name: "Bob".to_string(),
            created_at: Utc::now(),
            tax: 0.0,
            total: 12.0,
        };

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }
}
