//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mintflow_rpc_health` (gauge): 1=reachable, 0=unreachable
//! - `mintflow_records_stored_total` (counter): confirmed ledger records
//! - `mintflow_mint_attempts_total` (counter): mint attempts by status
//! - `mintflow_decode_failures_total` (counter): skipped trait payloads
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Exposition is optional; recorders are no-ops when no exporter is installed

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record whether the RPC endpoint answered a health-relevant call.
pub fn record_rpc_health(healthy: bool) {
    metrics::gauge!("mintflow_rpc_health").set(if healthy { 1.0 } else { 0.0 });
}

/// Record one confirmed ledger record.
pub fn record_record_stored() {
    metrics::counter!("mintflow_records_stored_total").increment(1);
}

/// Record the outcome of a mint attempt.
pub fn record_mint_result(success: bool) {
    let status = if success { "success" } else { "failure" };
    metrics::counter!("mintflow_mint_attempts_total", "status" => status).increment(1);
}

/// Record a trait payload that could not be decoded for preview.
pub fn record_decode_failure(trait_name: &str) {
    metrics::counter!(
        "mintflow_decode_failures_total",
        "trait" => trait_name.to_string()
    )
    .increment(1);
}
