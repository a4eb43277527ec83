//! Card for one job posting.
//!
//! DESIGN
//! ======
//! Every job field is interpolated as a text node or attribute value, which
//! the view layer escapes; nothing here uses `inner_html`. The apply action
//! goes through `util::safe_url`, so only http(s) targets are ever opened.

#[cfg(test)]
#[path = "job_card_test.rs"]
mod job_card_test;

use leptos::prelude::*;

use crate::net::types::Job;
use crate::util::safe_url;

/// A job card with apply and save actions.
#[component]
pub fn JobCard(job: Job, #[prop(into)] saved: Signal<bool>, on_toggle_save: Callback<i64>) -> impl IntoView {
    let id = job.id;
    let meta = job_meta(&job);
    let source = format!("Source: {}", job.source_platform);
    let url = job.job_url;

    view! {
        <div class="job-card" class:new-job=job.is_new data-job-id=id.to_string()>
            {job.is_new.then(|| view! { <span class="new-job-badge">"NEW"</span> })}
            <div class="job-title">{job.job_title}</div>
            <div class="company-name">{job.company_name}</div>
            <div class="job-meta">
                {meta
                    .into_iter()
                    .map(|(icon, text)| view! { <span>{icon}" "{text}</span> })
                    .collect_view()}
            </div>
            <div class="source-platform">{source}</div>
            <button
                class="apply-btn"
                on:click=move |_| {
                    let _ = safe_url::open_in_new_tab(&url);
                }
            >
                "Apply Now"
            </button>
            <button
                class="save-btn"
                class:saved=move || saved.get()
                on:click=move |_| on_toggle_save.run(id)
            >
                {move || save_label(saved.get())}
            </button>
        </div>
    }
}

/// Save-toggle label for the current membership.
pub(crate) fn save_label(saved: bool) -> &'static str {
    if saved { "💾 Saved" } else { "💾 Save Job" }
}

/// Icon + text pairs for the optional metadata row; absent fields are omitted.
pub(crate) fn job_meta(job: &Job) -> Vec<(&'static str, String)> {
    [
        ("📍", &job.location),
        ("💼", &job.experience_level),
        ("⏰", &job.job_type),
        ("📅", &job.posted_date),
    ]
    .into_iter()
    .filter_map(|(icon, value)| value.clone().map(|text| (icon, text)))
    .collect()
}
