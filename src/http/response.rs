//! Response construction.
//!
//! # Responsibilities
//! - Turn a negotiation outcome into a 200 or 304 response
//! - Map every internal failure to one generic 500 body
//!
//! # Design Decisions
//! - Failure detail is logged, never returned to the client
//! - Panics inside handlers get the same 500 body as typed errors

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

use crate::conditional::Negotiation;
use crate::search::SearchError;

/// Body of every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Failures surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("handler panicked: {0}")]
    Panic(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        internal_error_response()
    }
}

/// The generic `{"error": "Internal Server Error"}` response.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

/// Panic handler for `CatchPanicLayer`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Panic(message).into_response()
}

impl IntoResponse for Negotiation {
    fn into_response(self) -> Response {
        match self {
            Negotiation::NotModified { validator } => {
                (StatusCode::NOT_MODIFIED, [(header::ETAG, validator.to_etag())]).into_response()
            }
            Negotiation::Full { validator, payload } => (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/json".to_string()),
                    (header::ETAG, validator.to_etag()),
                ],
                payload,
            )
                .into_response(),
        }
    }
}
