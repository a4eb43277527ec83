//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the job board surfaces while reading/writing shared
//! state from Leptos context providers.

pub mod filter_bar;
pub mod job_card;
pub mod stats_bar;
pub mod toolbar;
