//! HTTP API handlers.

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse},
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::cluster::{demo_features, ClusterInfo};
use crate::config::Config;
use crate::metrics;
use crate::users::{seed_users, User};
use crate::utils::now_rfc3339;

/// Service name reported in health responses.
pub const SERVICE_NAME: &str = "k8s-demo-api";

const INDEX_HTML: &str = include_str!("../../static/index.html");
const APP_JS: &str = include_str!("../../static/app.js");
const STYLE_CSS: &str = include_str!("../../static/style.css");

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Deployment environment name.
    pub environment: String,
    /// Cluster placement info, read once at startup.
    pub cluster: ClusterInfo,
    /// The fixed user directory.
    pub users: Arc<Vec<User>>,
    /// Whether the service has bound its listener.
    pub ready: Arc<std::sync::atomic::AtomicBool>,
    /// Prometheus render handle, absent when no recorder is installed.
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state from the loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            environment: config.node_env.clone(),
            cluster: ClusterInfo::from_config(config),
            users: Arc::new(seed_users()),
            ready: Arc::new(std::sync::atomic::AtomicBool::new(false)),
            metrics_handle: None,
        }
    }

    /// Attach a Prometheus render handle for `/metrics`.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics_handle = Some(handle);
        self
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready
            .store(ready, std::sync::atomic::Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(std::sync::atomic::Ordering::SeqCst)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
    /// Service name.
    pub service: &'static str,
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    /// Whether the service is accepting traffic.
    pub ready: bool,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Human-readable status line.
    pub message: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Deployment environment name.
    pub environment: String,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

/// Users listing response.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// The fixed user records.
    pub users: Vec<User>,
    /// Number of records.
    pub count: usize,
    /// RFC 3339 UTC timestamp.
    pub timestamp: String,
}

/// Kubernetes info response.
#[derive(Debug, Serialize)]
pub struct KubernetesResponse {
    /// Greeting line.
    pub message: &'static str,
    /// Orchestration features this demo illustrates.
    pub features: Vec<String>,
    /// Cluster placement info.
    pub cluster: ClusterInfo,
}

/// Health check handler - always returns 200.
pub async fn health() -> Result<impl IntoResponse, ApiError> {
    metrics::inc_requests("/health");
    Ok(Json(HealthResponse {
        status: "ok",
        timestamp: now_rfc3339()?,
        service: SERVICE_NAME,
    }))
}

/// Readiness check handler - returns 200 if ready, 503 otherwise.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/ready");
    let is_ready = state.is_ready();

    let response = ReadyResponse { ready: is_ready };

    if is_ready {
        (StatusCode::OK, Json(response))
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Status handler - returns service version and environment.
pub async fn status(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    metrics::inc_requests("/api/status");
    Ok(Json(StatusResponse {
        message: "Kubernetes demo API is running",
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.clone(),
        timestamp: now_rfc3339()?,
    }))
}

/// Users handler - returns the fixed user directory.
pub async fn users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    metrics::inc_requests("/api/users");
    Ok(Json(UsersResponse {
        users: state.users.as_ref().clone(),
        count: state.users.len(),
        timestamp: now_rfc3339()?,
    }))
}

/// Kubernetes info handler - returns cluster metadata and the feature list.
pub async fn kubernetes(State(state): State<AppState>) -> impl IntoResponse {
    metrics::inc_requests("/api/kubernetes");
    Json(KubernetesResponse {
        message: "Hello from Kubernetes API 🚀",
        features: demo_features(),
        cluster: state.cluster.clone(),
    })
}

/// Prometheus metrics handler.
pub async fn metrics_text(State(state): State<AppState>) -> Result<String, ApiError> {
    match &state.metrics_handle {
        Some(handle) => Ok(handle.render()),
        None => Err(ApiError::not_found("/metrics")),
    }
}

/// Fallback handler - 404 with the requested path in the message.
pub async fn not_found(uri: Uri) -> ApiError {
    metrics::inc_not_found();
    ApiError::not_found(uri.path())
}

/// Frontend entry point.
pub async fn index() -> Html<&'static str> {
    metrics::inc_requests("/");
    Html(INDEX_HTML)
}

/// Frontend script.
pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// Frontend stylesheet.
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLE_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_ready_toggle() {
        let state = AppState::default();
        assert!(!state.is_ready());

        state.set_ready(true);
        assert!(state.is_ready());

        state.set_ready(false);
        assert!(!state.is_ready());
    }

    #[test]
    fn app_state_carries_config_environment() {
        let config = Config {
            node_env: "production".to_string(),
            hostname: "node-3".to_string(),
            namespace: "demo".to_string(),
            ..Config::default()
        };

        let state = AppState::new(&config);
        assert_eq!(state.environment, "production");
        assert_eq!(state.cluster.node, "node-3");
        assert_eq!(state.cluster.namespace, "demo");
        assert_eq!(state.users.len(), 3);
    }

    #[test]
    fn frontend_assets_are_embedded() {
        assert!(INDEX_HTML.contains("app.js"));
        assert!(APP_JS.contains("No users found"));
        assert!(!STYLE_CSS.is_empty());
    }
}
