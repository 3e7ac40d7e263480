//! HTTP adapters - REST API implementations.

pub mod dreams;

// Re-export key types for convenience
pub use dreams::dream_routes;
pub use dreams::DreamHandlers;

use axum::Router;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assembles the API router with CORS and tracing layers.
///
/// CORS is deliberately open: any origin, the full method set, any headers.
/// The OPTIONS pre-flight is answered by the layer with no body.
pub fn api_router(handlers: DreamHandlers) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .nest("/api/dreams", dream_routes(handlers))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
