//! Shared host state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled HTTP client used to forward
//! `/api` requests to the job backend. The host keeps no job data itself.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;
use crate::error::ProxyError;

/// Shared application state. Clone is required by Axum; fields are cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HostConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state with an HTTP client bounded by the upstream timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::HttpClientBuild`] if the TLS backend cannot initialize.
    pub fn new(config: HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
