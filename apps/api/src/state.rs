//! Application state for the HTTP server.

use billing_db::Database;

/// Shared application state passed to all handlers.
///
/// Constructed once in `main` (the composition root) and cloned into each
/// handler by axum; the inner pool is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database handle for repository access.
    pub db: Database,
}

impl AppState {
    /// Create a new application state with the given database handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}
