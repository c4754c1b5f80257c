//! Task List Component
//!
//! The renderer: a function of (task cache, filter) only. Tasks are
//! partitioned once into active/completed sections; the empty indicator
//! tracks exactly the subsets visible under the current filter.

use leptos::prelude::*;

use crate::models::{no_visible_tasks, partition_tasks, Task};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::components::TaskRow;

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let active_tasks = Memo::new(move |_| partition_tasks(&store.tasks().get()).0);
    let completed_tasks = Memo::new(move |_| partition_tasks(&store.tasks().get()).1);

    let show_active = move || store.filter().get().shows_active();
    let show_completed = move || store.filter().get().shows_completed();
    let show_empty = move || no_visible_tasks(store.filter().get(), &store.tasks().get());

    view! {
        <div class="task-lists">
            <Show when=show_active>
                <section class="task-section">
                    <h2>"Active"</h2>
                    <TaskSection tasks=active_tasks/>
                </section>
            </Show>

            <Show when=show_completed>
                <section class="task-section">
                    <h2>"Completed"</h2>
                    <TaskSection tasks=completed_tasks/>
                </section>
            </Show>

            <Show when=show_empty>
                <div class="empty-state">"No tasks here yet"</div>
            </Show>
        </div>
    }
}

/// One section of the list, in cache order
#[component]
fn TaskSection(tasks: Memo<Vec<Task>>) -> impl IntoView {
    view! {
        <div class="task-section-body">
            <For
                each=move || tasks.get()
                key=|task| (task.id, task.is_completed, task.title.clone())
                children=move |task| view! { <TaskRow task=task/> }
            />
        </div>
    }
}
