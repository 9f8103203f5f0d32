//! Prometheus metrics for the arena server.
//!
//! The exporter runs its own HTTP listener on a separate port so scrapes
//! never contend with API traffic. Counters are cheap to record and are
//! wired directly into the middleware and handlers.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Installs the global Prometheus recorder and starts the scrape endpoint.
///
/// Must be called at most once, before any metric is recorded. Metrics land
/// at `http://{addr}/metrics`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), String> {
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| format!("Failed to install Prometheus exporter: {e}"))
}

// ==== HTTP Metrics ====

/// Records a completed HTTP request with its method and response status.
pub fn http_requests_total(method: &str, status: u16) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
}

// ==== Arena Metrics ====

/// Records a join attempt. The outcome is `committed` or the error code of
/// the rejection.
pub fn join_attempts_total(outcome: &str) {
    metrics::counter!("join_attempts_total", "outcome" => outcome.to_string()).increment(1);
}

/// Records a tournament created by an admin.
pub fn tournaments_created_total() {
    metrics::counter!("tournaments_created_total").increment(1);
}

/// Records a wallet credit applied by an admin.
pub fn wallet_credits_total() {
    metrics::counter!("wallet_credits_total").increment(1);
}
