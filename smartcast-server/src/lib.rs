//! # SmartCast Server
//!
//! Minimal HTTP API over the SmartCast video catalog.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/api/videos` | every record, catalog order |
//! | GET | `/api/videos/{id}` | one record, or 404 `{"error": "Video not found"}` |
//! | GET | `/health` | `{"status": "ok", "videos": <count>}` |
//!
//! The catalog is loaded once at startup and never mutated, so handlers only
//! ever take shared references out of [`AppState`].

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::errors::{AppError, AppResult};

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the full application router with CORS and request tracing.
pub fn create_app(state: AppState) -> Router {
    let cors_layer = infra::cors::build_cors_layer(&state.config().cors);

    routes::create_router()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(state)
}
