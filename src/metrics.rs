//! Prometheus metrics for request counting and monitoring.

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

// === Metric Name Constants ===

/// HTTP requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Unmatched route counter metric name.
pub const METRIC_NOT_FOUND: &str = "http_not_found_total";
/// Handler error counter metric name.
pub const METRIC_HANDLER_ERRORS: &str = "http_handler_errors_total";

/// Install the Prometheus recorder and register metric descriptions.
/// Call this once at startup; the returned handle renders `/metrics`.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served, labeled by endpoint"
    );
    describe_counter!(
        METRIC_NOT_FOUND,
        "Total number of requests that matched no route"
    );
    describe_counter!(
        METRIC_HANDLER_ERRORS,
        "Total number of requests that ended in a handler error"
    );

    debug!("Metrics initialized");
    Ok(handle)
}

/// Increment the request counter for an endpoint.
pub fn inc_requests(endpoint: &'static str) {
    counter!(METRIC_HTTP_REQUESTS, "endpoint" => endpoint).increment(1);
}

/// Increment the unmatched-route counter.
pub fn inc_not_found() {
    counter!(METRIC_NOT_FOUND).increment(1);
}

/// Increment the handler error counter.
pub fn inc_handler_errors() {
    counter!(METRIC_HANDLER_ERRORS).increment(1);
}
