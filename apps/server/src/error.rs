use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use nse_market_data::{FailureClass, QuoteError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Error shape returned to clients: a status code and a `detail`
/// message. Lookup failures of every kind surface as 404 so callers
/// only distinguish "found" from "not found".
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }
}

impl From<QuoteError> for ApiError {
    fn from(e: QuoteError) -> Self {
        // Transient upstream trouble is worth a log line; the client
        // still just sees a 404.
        if e.failure_class() != FailureClass::Terminal {
            warn!(class = ?e.failure_class(), error = %e, "upstream failure surfaced as not-found");
        }
        match e {
            QuoteError::PriceUnavailable(_) => Self::not_found("Price unavailable"),
            _ => Self::not_found("NSE stock not found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}
