//! # billing-core: Pure Domain Types for Pizza Billing
//!
//! Domain types shared by the database layer and the HTTP API.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   Pizza Billing Architecture                    │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                  apps/api (axum server)                   │  │
//! │  │     routes ──► handlers ──► repositories                  │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              ★ billing-core (THIS CRATE) ★                │  │
//! │  │     Item, Invoice, InvoiceItem + request shapes           │  │
//! │  │     NO I/O • NO DATABASE • NO NETWORK                     │  │
//! │  └────────────────────────────┬──────────────────────────────┘  │
//! │                               │                                 │
//! │  ┌────────────────────────────▼──────────────────────────────┐  │
//! │  │              billing-db (Database Layer)                  │  │
//! │  │     SQLite queries, migrations, repositories              │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod types;

pub use types::*;
