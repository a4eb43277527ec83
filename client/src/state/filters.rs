//! Client-side filter criteria over the fetched job list.
//!
//! DESIGN
//! ======
//! Filtering is a pure function of `(jobs, criteria)`: the page recomputes the
//! visible list from scratch on every change, no backend round-trip. An empty
//! criterion never participates in the comparison.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use crate::net::types::Job;

/// Fixed options for the experience selector.
pub const EXPERIENCE_OPTIONS: [&str; 3] = ["Entry", "Mid", "Senior"];
/// Fixed options for the job-type selector.
pub const JOB_TYPE_OPTIONS: [&str; 4] = ["Full-time", "Part-time", "Contract", "Internship"];
/// Fixed options for the source selector; matched exactly.
pub const SOURCE_OPTIONS: [&str; 3] = ["LinkedIn", "Indeed", "Naukri"];

/// The five independent filter criteria. Empty string means "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Free text matched against title and company.
    pub search: String,
    pub location: String,
    pub experience: String,
    pub job_type: String,
    /// Exact, case-sensitive platform name.
    pub source: String,
}

impl FilterCriteria {
    /// `true` when no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.location.is_empty()
            && self.experience.is_empty()
            && self.job_type.is_empty()
            && self.source.is_empty()
    }

    /// Whether `job` satisfies every non-empty criterion.
    pub fn matches(&self, job: &Job) -> bool {
        let search = self.search.trim();
        if !search.is_empty() {
            let haystack = format!("{} {}", job.job_title, job.company_name);
            if !contains_ignore_case(&haystack, search) {
                return false;
            }
        }
        if !self.location.is_empty() && !contains_ignore_case(job.location.as_deref().unwrap_or(""), &self.location) {
            return false;
        }
        if !self.experience.is_empty()
            && !contains_ignore_case(job.experience_level.as_deref().unwrap_or(""), &self.experience)
        {
            return false;
        }
        if !self.job_type.is_empty() && !contains_ignore_case(job.job_type.as_deref().unwrap_or(""), &self.job_type) {
            return false;
        }
        if !self.source.is_empty() && job.source_platform != self.source {
            return false;
        }
        true
    }

    /// Jobs satisfying every active criterion, in their original order.
    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Distinct non-empty locations across `jobs`, sorted.
pub fn location_options(jobs: &[Job]) -> Vec<String> {
    let mut locations: Vec<String> = jobs.iter().filter_map(|job| job.location.clone()).collect();
    locations.sort();
    locations.dedup();
    locations
}
