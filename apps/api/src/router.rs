//! Router configuration for the HTTP API.
//!
//! Sets up all routes, CORS, and request tracing. The route table is static:
//! (method, path) → handler, nothing dynamic.

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, invoice, item};
use crate::state::AppState;

/// Create the application router with all routes and middleware.
///
/// CORS is restricted to the single `allowed_origin`, the four CRUD methods,
/// and the `Content-Type` header - mirroring the trusted-frontend setup.
pub fn create_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Item routes
        .route("/items", get(item::list_items).post(item::create_item))
        .route(
            "/items/{id}",
            get(item::get_item)
                .put(item::update_item)
                .delete(item::delete_item),
        )
        // Invoice routes
        .route(
            "/invoices",
            get(invoice::list_invoices).post(invoice::create_invoice),
        )
        .route(
            "/invoices/{id}",
            get(invoice::get_invoice)
                .put(invoice::update_invoice)
                .delete(invoice::delete_invoice),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
