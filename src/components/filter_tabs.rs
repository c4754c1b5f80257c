//! Filter Tabs Component
//!
//! Three tabs selecting which task subsets are rendered. Pure view
//! state: switching tabs never touches the backend.

use leptos::prelude::*;

use crate::models::FILTERS;
use crate::store::{use_app_store, AppStateStoreFields};

/// Filter tab bar (All / Active / Completed)
#[component]
pub fn FilterTabs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-tabs">
            {FILTERS.iter().map(|(filter, label)| {
                let filter = *filter;
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "tab-btn active" } else { "tab-btn" }
                        on:click=move |_| store.filter().set(filter)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
