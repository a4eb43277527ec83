//! Wire DTOs for the job backend's REST payloads.
//!
//! DESIGN
//! ======
//! The backend stores jobs in SQLite, so some fields arrive in storage shape
//! (`is_new` as `0`/`1`, optional text as `null` or `""`). Deserializers here
//! normalize that once so the rest of the client works with plain Rust types.
//! Job lists are decoded record by record: one malformed record is skipped
//! without discarding the rest of the payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// One scraped job posting as returned by `GET /api/jobs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Backend row id, unique within one fetched list.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub job_title: String,
    pub company_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub experience_level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub posted_date: Option<String>,
    /// Platform display name (`"LinkedIn"`, `"Indeed"`, `"Naukri"`).
    pub source_platform: String,
    pub job_url: String,
    /// Set until the backend marks the job as viewed.
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_new: bool,
}

/// Decoded `GET /api/jobs` payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobsPayload {
    pub jobs: Vec<Job>,
    /// Number of records dropped because they failed validation.
    pub skipped: usize,
}

/// `GET /api/stats` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_jobs: u64,
    #[serde(default)]
    pub new_jobs: u64,
    /// Job count per source platform, when the backend reports it.
    #[serde(default)]
    pub platform_counts: BTreeMap<String, u64>,
}

/// `POST /api/scrape` success response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default)]
    pub new_jobs_count: u64,
}

/// Error body the backend attaches to non-success responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Decode a jobs payload, skipping records that fail validation.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the payload is not an object with a
/// `jobs` array.
pub fn decode_jobs(payload: serde_json::Value) -> Result<JobsPayload, ApiError> {
    let serde_json::Value::Object(mut body) = payload else {
        return Err(ApiError::Decode("jobs payload is not an object".to_owned()));
    };
    let Some(serde_json::Value::Array(records)) = body.remove("jobs") else {
        return Err(ApiError::Decode("jobs payload has no `jobs` array".to_owned()));
    };

    let mut decoded = JobsPayload { jobs: Vec::with_capacity(records.len()), skipped: 0 };
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Job>(record) {
            Ok(job) => decoded.jobs.push(job),
            Err(e) => {
                leptos::logging::warn!("skipping malformed job record #{index}: {e}");
                decoded.skipped += 1;
            }
        }
    }
    Ok(decoded)
}

fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::Null => Ok(false),
        _ => Err(D::Error::custom("expected boolean or 0/1")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
