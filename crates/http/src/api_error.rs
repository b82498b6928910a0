//! Typed API error for the JSON routes.
//!
//! Converts catalog lookups that missed into HTTP responses with a JSON body
//! and status code. Page routes render their own not-found document instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use apidocs_core::CoreError;

/// Converts to a JSON response: `{"error": "message"}`.
///
/// The catalog is validated when it is built, so the only failure a JSON
/// route can hit at request time is a missed lookup.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found: no endpoint with the requested id.
    NotFound(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl ApiError {
    /// Wraps a failed [`apidocs_core::Catalog::resolve`].
    #[must_use]
    pub fn unresolved(err: &CoreError) -> Self {
        Self::NotFound(err.to_string())
    }
}
