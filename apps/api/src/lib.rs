//! # billing-api
//!
//! HTTP API server for the billing backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        billing-api                              │
//! │                                                                 │
//! │  Frontend ───► axum router ───► handlers ───► repositories     │
//! │   (CORS)          │                               │             │
//! │                   │                               ▼             │
//! │                TraceLayer                      SQLite           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `API_PORT` - HTTP port (default: 8080)
//! - `DATABASE_PATH` - SQLite file path (default: ./billing.db)
//! - `CORS_ORIGIN` - the single allowed origin (default: http://localhost:3000)

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
