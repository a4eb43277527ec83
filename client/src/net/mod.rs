//! Networking modules for the job backend's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and record
//! validation, and `error` carries call failures back to the page.

pub mod api;
pub mod error;
pub mod types;
