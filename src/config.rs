//! Host configuration parsed from environment variables.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 300;

/// Errors produced while reading host configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// The backend URL is not an absolute http(s) URL.
    #[error("JOBBOARD_BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// API root of the job backend, without a trailing slash.
    pub backend_url: String,
    pub upstream_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `JOBBOARD_BACKEND_URL`: default `http://127.0.0.1:5000/api`
    /// - `JOBBOARD_UPSTREAM_TIMEOUT_SECS`: default 300
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is present but malformed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let upstream_timeout_secs =
            parse_or("JOBBOARD_UPSTREAM_TIMEOUT_SECS", lookup("JOBBOARD_UPSTREAM_TIMEOUT_SECS"), DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        if upstream_timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "JOBBOARD_UPSTREAM_TIMEOUT_SECS", value: "0".to_owned() });
        }

        let backend_url = lookup("JOBBOARD_BACKEND_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        let lowered = backend_url.to_ascii_lowercase();
        if !lowered.starts_with("http://") && !lowered.starts_with("https://") {
            return Err(ConfigError::BackendScheme(backend_url));
        }
        let backend_url = backend_url.trim_end_matches('/').to_owned();

        Ok(Self { port, backend_url, upstream_timeout_secs })
    }

    /// Join a request path below the backend API root.
    #[must_use]
    pub fn backend_endpoint(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query.filter(|q| !q.is_empty()) {
            Some(q) => format!("{}/{path}?{q}", self.backend_url),
            None => format!("{}/{path}", self.backend_url),
        }
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
