//! New Task Form Component
//!
//! Input + Add button. Validation happens in the sync controller; this
//! component only clears the input and flips the placeholder feedback.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::TITLE_MAX_CHARS;
use crate::store::{store_set_error, use_app_store, AppStateStoreFields};
use crate::sync::{use_sync, AddStatus};

const DEFAULT_PLACEHOLDER: &str = "Add a new task...";

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let sync = use_sync();

    let (title, set_title) = signal(String::new());
    let (placeholder, set_placeholder) = signal(DEFAULT_PLACEHOLDER.to_string());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = title.get();

        spawn_local(async move {
            let status = sync.add(&raw).await;
            let feedback = match status {
                AddStatus::Synced => "Task added successfully!",
                AddStatus::Local => "Task added locally!",
                AddStatus::Rejected => return,
            };
            set_title.set(String::new());
            set_placeholder.set(feedback.to_string());
            TimeoutFuture::new(2000).await;
            set_placeholder.set(DEFAULT_PLACEHOLDER.to_string());
        });
    };

    view! {
        <form class="add-task-form" on:submit=add_task>
            <div class="add-task-row">
                <input
                    type="text"
                    class="task-input"
                    maxlength=TITLE_MAX_CHARS.to_string()
                    placeholder=move || placeholder.get()
                    prop:value=move || title.get()
                    on:input=move |ev| {
                        set_title.set(event_target_value(&ev));
                        // Typing dismisses the inline error
                        store_set_error(&store, None);
                    }
                />
                <button type="submit" class="add-task-btn">"Add"</button>
            </div>

            {move || store.error().get().map(|message| view! {
                <div class="input-error">{message}</div>
            })}
        </form>
    }
}
