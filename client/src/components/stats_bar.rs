//! Summary counters and per-platform breakdown.

#[cfg(test)]
#[path = "stats_bar_test.rs"]
mod stats_bar_test;

use leptos::prelude::*;

use crate::net::types::Stats;
use crate::state::jobs::JobBoardState;

#[component]
pub fn StatsBar() -> impl IntoView {
    let board = expect_context::<RwSignal<JobBoardState>>();

    let total = move || board.with(|s| s.stats.as_ref().map_or(0, |st| st.total_jobs));
    let new_jobs = move || board.with(|s| s.stats.as_ref().map_or(0, |st| st.new_jobs));
    let saved = move || board.with(|s| s.saved.len());
    let showing = move || board.with(|s| showing_label(s.visible_jobs().len(), s.jobs.len()));
    let platforms = move || board.with(|s| s.stats.as_ref().map(platform_breakdown).unwrap_or_default());

    view! {
        <div class="stats">
            <div class="stat-card">
                <span class="stat-card__value" id="totalJobs">{total}</span>
                <span class="stat-card__label">"Total Jobs"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value" id="newJobs">{new_jobs}</span>
                <span class="stat-card__label">"New Jobs"</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__value">{saved}</span>
                <span class="stat-card__label">"Saved"</span>
            </div>
            <span class="stats__showing">{showing}</span>
            <ul class="stats__platforms">
                {move || {
                    platforms()
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

/// "Showing N of M jobs" line under the counters.
pub(crate) fn showing_label(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} jobs")
}

/// One `"Platform: count"` line per platform, sorted by name.
pub(crate) fn platform_breakdown(stats: &Stats) -> Vec<String> {
    stats
        .platform_counts
        .iter()
        .map(|(platform, count)| format!("{platform}: {count}"))
        .collect()
}
