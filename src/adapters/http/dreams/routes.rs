//! HTTP routes for dream endpoints.

use axum::{routing::post, Router};

use super::handlers::{interpret_dream, submit_dream, DreamHandlers};

/// Creates the dream router with all endpoints.
pub fn dream_routes(handlers: DreamHandlers) -> Router {
    Router::new()
        .route("/", post(submit_dream))
        .route("/interpret", post(interpret_dream))
        .with_state(handlers)
}
