//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`jobs`, `filters`, `saved`, `ui`) so filter and
//! bookmark rules can be tested without a rendering environment.

pub mod filters;
pub mod jobs;
pub mod saved;
pub mod ui;
