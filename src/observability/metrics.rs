//! Metrics collection and exposition.
//!
//! # Metrics
//! - `phasebook_requests_total` (counter): requests by endpoint, status
//! - `phasebook_request_duration_seconds` (histogram): latency by endpoint
//! - `phasebook_search_matches` (histogram): result-set size
//! - `phasebook_not_modified_total` (counter): conditional hits

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::time::Instant;

/// Install the Prometheus recorder and its HTTP listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(endpoint: &'static str, status: u16, start: Instant) {
    counter!(
        "phasebook_requests_total",
        "endpoint" => endpoint,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("phasebook_request_duration_seconds", "endpoint" => endpoint)
        .record(start.elapsed().as_secs_f64());
}

/// Record the size of a search result set.
pub fn record_search_matches(count: usize) {
    histogram!("phasebook_search_matches").record(count as f64);
}

/// Record a conditional request answered with 304.
pub fn record_not_modified() {
    counter!("phasebook_not_modified_total").increment(1);
}
