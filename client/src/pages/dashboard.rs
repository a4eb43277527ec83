//! Job board page: filters, stats and the job list.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It owns the fetch cycle: one jobs + stats load on
//! mount, a repeat every five minutes while mounted, and on-demand refreshes
//! from the toolbar and after a successful scrape. Every fetch is tagged with
//! a generation in `JobBoardState`, so whichever request was issued last wins
//! regardless of completion order.

use std::time::Duration;

use leptos::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::job_card::JobCard;
use crate::components::stats_bar::StatsBar;
use crate::components::toolbar::Toolbar;
use crate::state::jobs::JobBoardState;

/// Interval between background refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[component]
pub fn JobBoardPage() -> impl IntoView {
    let board = expect_context::<RwSignal<JobBoardState>>();

    Effect::new(move || refresh(board));

    #[cfg(feature = "hydrate")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh(board);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_refresh = Callback::new(move |()| refresh(board));
    let on_scrape = Callback::new(move |()| scrape(board));
    let on_mark_viewed = Callback::new(move |()| mark_viewed(board));
    let on_toggle_save = Callback::new(move |id: i64| {
        board.update(|s| {
            s.toggle_saved(id);
        });
    });

    let visible = Memo::new(move |_| board.with(JobBoardState::visible_jobs));

    view! {
        <div class="job-board-page">
            <Toolbar on_refresh=on_refresh on_scrape=on_scrape on_mark_viewed=on_mark_viewed/>
            <StatsBar/>
            <FilterBar/>

            <Show when=move || board.with(|s| s.error.is_some())>
                <div class="job-board-page__error" role="alert">
                    <span>{move || board.with(|s| s.error.clone().unwrap_or_default())}</span>
                    <button class="btn" on:click=move |_| board.update(JobBoardState::dismiss_error)>
                        "Dismiss"
                    </button>
                </div>
            </Show>
            <Show when=move || board.with(|s| s.loading)>
                <p class="job-board-page__loading" id="loadingIndicator">"Loading jobs..."</p>
            </Show>

            <Show
                when=move || !visible.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <p class="job-board-page__empty" id="noJobs">
                            "No jobs found matching your criteria."
                        </p>
                    }
                }
            >
                <div class="jobs-grid" id="jobsContainer">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|job| {
                                let id = job.id;
                                let saved = Signal::derive(move || board.with(|s| s.saved.contains(id)));
                                view! { <JobCard job=job saved=saved on_toggle_save=on_toggle_save/> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}

/// Issue one jobs fetch and one stats fetch.
fn refresh(board: RwSignal<JobBoardState>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(generation) = board.try_update(JobBoardState::begin_jobs_fetch) {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_jobs().await;
                board.update(|s| {
                    s.finish_jobs_fetch(generation, result);
                });
            });
        }
        if let Some(generation) = board.try_update(JobBoardState::begin_stats_fetch) {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_stats().await;
                board.update(|s| {
                    s.finish_stats_fetch(generation, result);
                });
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = board;
    }
}

/// Run a scrape unless one is already in flight, report, then refresh once.
fn scrape(board: RwSignal<JobBoardState>) {
    if !board.try_update(JobBoardState::begin_scrape).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::trigger_scrape().await;
        let Some(report) = board.try_update(|s| s.finish_scrape(result)) else {
            return;
        };
        crate::util::notify::alert(&report.message);
        if report.refresh {
            refresh(board);
        }
    });
}

fn mark_viewed(board: RwSignal<JobBoardState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::mark_jobs_viewed().await {
            Ok(()) => refresh(board),
            Err(e) => {
                leptos::logging::error!("Error marking jobs viewed: {e}");
                crate::util::notify::alert(crate::state::jobs::MARK_VIEWED_FAILED_MESSAGE);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = board;
    }
}
