//! Host-side error types and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Failures while forwarding a request to the job backend.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or the exchange broke off.
    #[error("job backend unreachable: {0}")]
    Upstream(String),

    /// The backend did not answer within the configured timeout.
    #[error("job backend timed out after {0}s")]
    Timeout(u64),

    /// The request path would leave the backend API root.
    #[error("path not allowed under /api: {0}")]
    BadPath(String),

    /// The outbound HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::BadPath(_) => StatusCode::BAD_REQUEST,
            Self::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = status.as_u16(), "api forward failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
