//! Task Row Component
//!
//! A single task: completion checkbox, title, delete control. The title
//! is rendered as a text node, so markup in it never executes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Task;
use crate::sync::use_sync;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let sync = use_sync();

    let id = task.id;
    let completed = task.is_completed;
    let title = task.title.clone();

    view! {
        <div class=move || if completed { "task-item completed" } else { "task-item" }>
            <input
                type="checkbox"
                class="task-checkbox"
                checked=completed
                on:change=move |_| {
                    spawn_local(async move {
                        sync.toggle(id).await;
                    });
                }
            />

            <span class="task-title">{title}</span>

            <button
                class="task-delete-btn"
                title="Delete task"
                on:click=move |_| sync.request_delete(id)
            >
                "🗑️"
            </button>
        </div>
    }
}
