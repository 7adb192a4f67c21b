//! Filter Bar Component
//!
//! Status filter buttons for the task list.

use leptos::prelude::*;

use crate::filter::StatusFilter;
use crate::store::{use_dash_store, DashStateStoreFields};

const FILTERS: &[StatusFilter] = &[
    StatusFilter::All,
    StatusFilter::Pending,
    StatusFilter::Completed,
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_dash_store();

    view! {
        <div class="filter-row">
            {FILTERS.iter().map(|filter| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.filter().set(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
