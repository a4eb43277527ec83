//! Job board state: fetched jobs, filters, saved set, stats, scrape status.
//!
//! DESIGN
//! ======
//! One explicit state object replaces page-level globals. It is provided to
//! the view tree as `RwSignal<JobBoardState>`, but every transition here is a
//! plain method so the fetch/filter/scrape rules can be tested natively.
//!
//! Fetch results are tagged with a generation taken when the request was
//! issued. Only the latest generation of each kind is applied, so a slow
//! periodic refresh can never overwrite a newer manual one.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use crate::net::error::ApiError;
use crate::net::types::{Job, JobsPayload, ScrapeResponse, Stats};
use crate::state::filters::{self, FilterCriteria};
use crate::state::saved::SavedJobs;

/// Notice shown when the job list cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load jobs. Please try again.";
/// Notice shown when the scrape call itself fails.
pub const SCRAPE_ERROR_MESSAGE: &str = "Error triggering scrape. Please try again.";
/// Notice shown when marking jobs viewed fails.
pub const MARK_VIEWED_FAILED_MESSAGE: &str = "Failed to mark jobs as viewed.";

/// Scrape control state: `Idle -> Scraping -> Idle`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrapeStatus {
    #[default]
    Idle,
    Scraping,
}

impl ScrapeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Scrape Now",
            Self::Scraping => "Scraping...",
        }
    }
}

/// What the page should do once a scrape settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeReport {
    /// Blocking notice for the user.
    pub message: String,
    /// Whether one jobs + stats refresh should follow.
    pub refresh: bool,
}

/// Shared job board state.
#[derive(Clone, Debug, Default)]
pub struct JobBoardState {
    /// Latest fetched jobs in backend order.
    pub jobs: Vec<Job>,
    pub filters: FilterCriteria,
    pub saved: SavedJobs,
    pub stats: Option<Stats>,
    /// Distinct sorted locations offered by the location selector.
    pub location_options: Vec<String>,
    pub loading: bool,
    /// Non-blocking error banner; cleared by the next successful load.
    pub error: Option<String>,
    pub scrape: ScrapeStatus,
    jobs_generation: u64,
    stats_generation: u64,
}

impl JobBoardState {
    /// Install the saved set read from storage once the page has hydrated.
    /// Jobs, filters and fetch bookkeeping are left as they are.
    pub fn restore_saved(&mut self, saved: SavedJobs) {
        self.saved = saved;
    }

    /// Jobs satisfying the active filters.
    pub fn visible_jobs(&self) -> Vec<Job> {
        self.filters.apply(&self.jobs)
    }

    /// Mark a jobs fetch as issued and return its generation.
    pub fn begin_jobs_fetch(&mut self) -> u64 {
        self.jobs_generation += 1;
        self.loading = true;
        self.jobs_generation
    }

    /// Settle a jobs fetch. Returns `false` if a newer fetch superseded it.
    pub fn finish_jobs_fetch(&mut self, generation: u64, result: Result<JobsPayload, ApiError>) -> bool {
        if generation != self.jobs_generation {
            leptos::logging::log!("dropping stale jobs response (generation {generation}, latest {})", self.jobs_generation);
            return false;
        }
        self.loading = false;
        match result {
            Ok(payload) => {
                if payload.skipped > 0 {
                    leptos::logging::warn!("{} malformed job records skipped", payload.skipped);
                }
                self.replace_jobs(payload.jobs);
                self.error = None;
            }
            Err(e) => {
                leptos::logging::error!("Error loading jobs: {e}");
                self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        true
    }

    /// Mark a stats fetch as issued and return its generation.
    pub fn begin_stats_fetch(&mut self) -> u64 {
        self.stats_generation += 1;
        self.stats_generation
    }

    /// Settle a stats fetch. Failures are logged and keep the prior stats.
    pub fn finish_stats_fetch(&mut self, generation: u64, result: Result<Stats, ApiError>) -> bool {
        if generation != self.stats_generation {
            leptos::logging::log!("dropping stale stats response (generation {generation}, latest {})", self.stats_generation);
            return false;
        }
        match result {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => leptos::logging::error!("Error loading stats: {e}"),
        }
        true
    }

    /// Replace the job list wholesale and rebuild the location options,
    /// keeping the current location selection only if it is still offered.
    pub fn replace_jobs(&mut self, jobs: Vec<Job>) {
        self.location_options = filters::location_options(&jobs);
        if !self.filters.location.is_empty() && !self.location_options.contains(&self.filters.location) {
            self.filters.location.clear();
        }
        self.jobs = jobs;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterCriteria::default();
    }

    /// Flip a job's saved state and persist the set. Returns the new state.
    pub fn toggle_saved(&mut self, id: i64) -> bool {
        let saved = self.saved.toggle(id);
        self.saved.persist();
        saved
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Enter `Scraping`. Returns `false` if a scrape is already running.
    pub fn begin_scrape(&mut self) -> bool {
        if self.scrape == ScrapeStatus::Scraping {
            return false;
        }
        self.scrape = ScrapeStatus::Scraping;
        true
    }

    /// Return to `Idle` and describe the outcome, success or failure.
    pub fn finish_scrape(&mut self, result: Result<ScrapeResponse, ApiError>) -> ScrapeReport {
        self.scrape = ScrapeStatus::Idle;
        match result {
            Ok(resp) => ScrapeReport {
                message: format!("Scraping completed. {} new jobs found.", resp.new_jobs_count),
                refresh: true,
            },
            Err(ApiError::Status { status, message }) => {
                leptos::logging::error!("Scrape failed with status {status}: {message}");
                ScrapeReport { message: format!("Scraping failed: {message}"), refresh: false }
            }
            Err(e) => {
                leptos::logging::error!("Error triggering scrape: {e}");
                ScrapeReport { message: SCRAPE_ERROR_MESSAGE.to_owned(), refresh: false }
            }
        }
    }
}
