//! Error type shared by the REST helpers.

/// Failure of one backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, DNS, CORS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Called outside the browser (SSR or native tests).
    #[error("not available on server")]
    Unavailable,
}

/// Pick the message to show for a non-success response: the backend's
/// `error` field, else the HTTP status text, else `"Unknown error"`.
pub fn status_failure_message(body_error: Option<&str>, status_text: &str) -> String {
    body_error
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .or_else(|| Some(status_text.trim()).filter(|s| !s.is_empty()))
        .unwrap_or("Unknown error")
        .to_owned()
}
