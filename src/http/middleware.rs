//! Request accounting middleware.
//!
//! Sits outside the panic and timeout layers so every status a client can
//! see, including the generic 500, is counted.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::observability::metrics;

/// Metrics label for a request path.
pub fn endpoint_label(path: &str) -> &'static str {
    match path {
        "/search" => "search",
        "/health" => "health",
        _ => "other",
    }
}

/// Count the request and its latency once a response exists.
pub async fn track_requests(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = endpoint_label(request.uri().path());

    let response = next.run(request).await;
    metrics::record_request(endpoint, response.status().as_u16(), start);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_label() {
        assert_eq!(endpoint_label("/search"), "search");
        assert_eq!(endpoint_label("/health"), "health");
        assert_eq!(endpoint_label("/search/extra"), "other");
        assert_eq!(endpoint_label("/"), "other");
    }
}
