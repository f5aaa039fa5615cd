//! Request handlers.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::HashMap;

use crate::conditional::{negotiate, Negotiation};
use crate::http::request::request_id;
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::search::{self, Filter};
use crate::store::RecordStore;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub records: usize,
}

/// `GET /search`
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok());

    match answer_search(&state.store, &params, if_none_match) {
        Ok(negotiation) => {
            tracing::debug!(
                request_id = %request_id(&headers),
                etag = %negotiation.validator(),
                not_modified = negotiation.is_not_modified(),
                "Search answered"
            );
            negotiation.into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Parse, match, rank, encode and negotiate one search.
pub fn answer_search(
    store: &RecordStore,
    params: &HashMap<String, String>,
    if_none_match: Option<&str>,
) -> Result<Negotiation, ApiError> {
    let filter = Filter::from_params(params);
    let results = search::search(store, &filter)?;
    metrics::record_search_matches(results.matches.len());

    let negotiation = negotiate(results.payload, if_none_match);
    if negotiation.is_not_modified() {
        metrics::record_not_modified();
    }
    Ok(negotiation)
}

/// `GET /health`
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let body = Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        records: state.store.len(),
    });
    (StatusCode::OK, body)
}
