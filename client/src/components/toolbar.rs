//! Header actions: refresh, scrape, mark viewed, theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! The toolbar only raises intents; the page owns the network calls. The
//! scrape button reflects `ScrapeStatus` and stays disabled while a scrape is
//! in flight, so a second scrape cannot be started.

use leptos::prelude::*;

use crate::state::jobs::{JobBoardState, ScrapeStatus};
use crate::state::ui::UiState;

#[component]
pub fn Toolbar(on_refresh: Callback<()>, on_scrape: Callback<()>, on_mark_viewed: Callback<()>) -> impl IntoView {
    let board = expect_context::<RwSignal<JobBoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let scrape_status = move || board.with(|s| s.scrape);

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Job Board"</span>
            <span class="toolbar__spacer"></span>
            <button id="refreshBtn" class="btn" on:click=move |_| on_refresh.run(())>
                "Refresh"
            </button>
            <button
                id="scrapeBtn"
                class="btn btn--primary"
                disabled=move || scrape_status() == ScrapeStatus::Scraping
                on:click=move |_| on_scrape.run(())
            >
                {move || scrape_status().label()}
            </button>
            <button class="btn" on:click=move |_| on_mark_viewed.run(())>
                "Mark all viewed"
            </button>
            <button
                id="themeToggle"
                class="btn toolbar__theme-toggle"
                on:click=move |_| {
                    let next = crate::util::theme::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
                title="Toggle theme"
            >
                {move || ui.get().theme.toggle_icon()}
            </button>
        </header>
    }
}
