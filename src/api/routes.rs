//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    app_js, health, index, kubernetes, metrics_text, not_found, ready, status, style_css, users,
    AppState,
};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health))
        .route("/ready", get(ready))
        // Demo API endpoints
        .route("/api/status", get(status))
        .route("/api/users", get(users))
        .route("/api/kubernetes", get(kubernetes))
        // Metrics endpoint
        .route("/metrics", get(metrics_text))
        // Embedded frontend
        .route("/", get(index))
        .route("/app.js", get(app_js))
        .route("/style.css", get(style_css))
        .fallback(not_found)
        // Permissive CORS: in the dev split the frontend is served from
        // another port than the API.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
