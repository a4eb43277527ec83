//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::dashboard::JobBoardPage;
use crate::state::jobs::JobBoardState;
use crate::state::saved::SavedJobs;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the job board and UI state contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(JobBoardState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(board);
    provide_context(ui);

    // Browser storage is only readable after hydration; the server render
    // always starts from the defaults.
    Effect::new(move || {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
        board.update(|s| s.restore_saved(SavedJobs::load()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="Job Board"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=JobBoardPage/>
            </Routes>
        </Router>
    }
}
