//! Todo App Frontend
//!
//! Main application component: owns the store and sync controller,
//! provides them via context, and lays out the UI.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands::TauriBackend;
use crate::components::{
    apply_theme, load_theme, DeleteModal, FilterTabs, NewTaskForm, TaskList, ThemeToggle,
};
use crate::store::{AppState, AppStore};
use crate::sync::SyncController;

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    let sync = SyncController::new(TauriBackend, store);

    provide_context(store);
    provide_context(sync);

    apply_theme(load_theme());

    // Initial full list fetch
    Effect::new(move |_| {
        spawn_local(async move {
            sync.load().await;
        });
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Todo App"</h1>
                <ThemeToggle/>
            </header>

            <main class="app-main">
                <NewTaskForm/>
                <FilterTabs/>
                <TaskList/>
            </main>

            <DeleteModal/>
        </div>
    }
}
