//! Search box, four selectors and the clear action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Writes straight into `JobBoardState::filters`; the job list re-filters
//! reactively, so there is no separate "apply" step.

use leptos::prelude::*;

use crate::state::filters::{EXPERIENCE_OPTIONS, FilterCriteria, JOB_TYPE_OPTIONS, SOURCE_OPTIONS};
use crate::state::jobs::JobBoardState;

#[cfg(test)]
#[path = "filter_bar_test.rs"]
mod filter_bar_test;

/// Filter controls bound to the shared job board state.
#[component]
pub fn FilterBar() -> impl IntoView {
    let board = expect_context::<RwSignal<JobBoardState>>();

    let field = move |read: fn(&FilterCriteria) -> &String| Signal::derive(move || board.with(|s| read(&s.filters).clone()));
    let setter = move |write: fn(&mut FilterCriteria) -> &mut String| {
        Callback::new(move |value: String| board.update(|s| *write(&mut s.filters) = value))
    };

    let search = field(|f| &f.search);
    let set_search = setter(|f| &mut f.search);
    let fixed = |options: &[&str]| {
        let options: Vec<String> = options.iter().map(|o| (*o).to_owned()).collect();
        Signal::derive(move || options.clone())
    };

    view! {
        <div class="filters">
            <input
                id="searchInput"
                class="filters__search"
                type="text"
                placeholder="Search job title or company..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.run(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        set_search.run(event_target_value(&ev));
                    }
                }
            />
            <FilterSelect
                id="locationFilter"
                all_label="All Locations"
                options=Signal::derive(move || board.with(|s| s.location_options.clone()))
                value=field(|f| &f.location)
                on_change=setter(|f| &mut f.location)
            />
            <FilterSelect
                id="experienceFilter"
                all_label="All Experience Levels"
                options=fixed(&EXPERIENCE_OPTIONS[..])
                value=field(|f| &f.experience)
                on_change=setter(|f| &mut f.experience)
            />
            <FilterSelect
                id="jobTypeFilter"
                all_label="All Job Types"
                options=fixed(&JOB_TYPE_OPTIONS[..])
                value=field(|f| &f.job_type)
                on_change=setter(|f| &mut f.job_type)
            />
            <FilterSelect
                id="sourceFilter"
                all_label="All Sources"
                options=fixed(&SOURCE_OPTIONS[..])
                value=field(|f| &f.source)
                on_change=setter(|f| &mut f.source)
            />
            <button id="clearFilters" class="btn" on:click=move |_| board.update(JobBoardState::clear_filters)>
                "Clear Filters"
            </button>
        </div>
    }
}

/// A `<select>` with a leading "all" option whose value is the empty string.
#[component]
fn FilterSelect(
    id: &'static str,
    all_label: &'static str,
    options: Signal<Vec<String>>,
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            class="filters__select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="" selected=move || value.get().is_empty()>{all_label}</option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|option| {
                        let selected = option == current;
                        let label = option.clone();
                        view! { <option value=option selected=selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
