//! # Repository Module
//!
//! Database repository implementations for the billing backend.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  HTTP Handler                                                   │
//! │       │                                                         │
//! │       │  db.invoices().create(&new_invoice)                     │
//! │       ▼                                                         │
//! │  InvoiceRepository                                              │
//! │  ├── list / get / items_for                                     │
//! │  └── create / update / delete (transactional)                   │
//! │       │                                                         │
//! │       │  SQL                                                    │
//! │       ▼                                                         │
//! │  SQLite Database                                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`item::ItemRepository`] - Menu item CRUD, single-statement operations
//! - [`invoice::InvoiceRepository`] - Invoice header + line items, with the
//!   transactional write path

pub mod invoice;
pub mod item;
