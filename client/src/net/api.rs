//! REST API helpers for the job backend, reached through the host's `/api`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>` so callers decide how loudly a
//! failure surfaces; nothing here panics or touches UI state. No timeout or
//! cancellation is applied to in-flight requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{JobsPayload, ScrapeResponse, Stats};

/// Fixed API root all backend calls live under.
pub const API_BASE: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}/{}", path.trim_start_matches('/'))
}

#[cfg(feature = "hydrate")]
async fn send(request: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.json::<super::types::ErrorBody>().await.ok();
    let message = super::error::status_failure_message(body.as_ref().and_then(|b| b.error.as_deref()), &status_text);
    Err(ApiError::Status { status, message })
}

/// Fetch the full job list from `GET /api/jobs`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-success status, or a payload
/// without a `jobs` array. Individually malformed records are skipped.
pub async fn fetch_jobs() -> Result<JobsPayload, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&endpoint("jobs"))).await?;
        let payload = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        super::types::decode_jobs(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch summary statistics from `GET /api/stats`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure, non-success status, or decode failure.
pub async fn fetch_stats() -> Result<Stats, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::get(&endpoint("stats"))).await?;
        resp.json::<Stats>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Start a scrape via `POST /api/scrape` and wait for its result.
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying the backend's error text when the
/// scrape fails, or another [`ApiError`] when the call itself fails.
pub async fn trigger_scrape() -> Result<ScrapeResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(gloo_net::http::Request::post(&endpoint("scrape"))).await?;
        resp.json::<ScrapeResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Clear every job's new flag via `POST /api/jobs/mark-viewed`.
///
/// # Errors
///
/// Returns [`ApiError`] on network failure or non-success status.
pub async fn mark_jobs_viewed() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(gloo_net::http::Request::post(&endpoint("jobs/mark-viewed"))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
