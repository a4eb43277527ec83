//! Forwarding of the `/api` root to the job backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client only ever talks to its own origin under `/api`. This
//! handler relays those calls to `JOBBOARD_BACKEND_URL`, preserving method,
//! query string, content type and body, and hands the backend's status and
//! body back untouched so the client sees the backend's own error payloads.
//! The path is forwarded exactly as sent (still percent-encoded) and may not
//! climb out of the API root.

use axum::body::Bytes;
use axum::extract::{OriginalUri, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::error::ProxyError;
use crate::state::AppState;

/// Request headers relayed to the backend.
const FORWARDED_HEADERS: [header::HeaderName; 2] = [header::CONTENT_TYPE, header::ACCEPT];

/// `ANY /api/{*path}`: relay to the backend API root.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = api_subpath(uri.path())?;
    let url = state.config.backend_endpoint(path, uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method.clone(), &url);
    for name in FORWARDED_HEADERS {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request
        .send()
        .await
        .map_err(|e| classify(&e, state.config.upstream_timeout_secs))?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| classify(&e, state.config.upstream_timeout_secs))?;

    if !status.is_success() {
        tracing::info!(%method, path = %path, status = status.as_u16(), "backend returned non-success");
    }

    Ok(relay_response(status, content_type, bytes))
}

/// The still percent-encoded path below `/api/`.
///
/// Dot segments (plain or encoded) and encoded separators are refused, so
/// the forwarded URL always stays below the backend API root.
fn api_subpath(path: &str) -> Result<&str, ProxyError> {
    let rest = path
        .strip_prefix("/api/")
        .ok_or_else(|| ProxyError::BadPath(path.to_owned()))?;
    for segment in rest.split('/') {
        let lowered = segment.to_ascii_lowercase();
        let decoded_dots = lowered.replace("%2e", ".");
        if decoded_dots == "."
            || decoded_dots == ".."
            || lowered.contains("%2f")
            || lowered.contains("%5c")
            || segment.contains('\\')
        {
            return Err(ProxyError::BadPath(path.to_owned()));
        }
    }
    Ok(rest)
}

fn classify(err: &reqwest::Error, timeout_secs: u64) -> ProxyError {
    if err.is_timeout() {
        ProxyError::Timeout(timeout_secs)
    } else {
        ProxyError::Upstream(err.to_string())
    }
}

fn relay_response(status: StatusCode, content_type: Option<HeaderValue>, bytes: Bytes) -> Response {
    let mut response = (status, bytes).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
