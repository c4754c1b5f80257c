//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All task
//! mutations go through the helpers here so the cache is never left
//! half-updated between renders.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{DeleteConfirm, Task, TaskFilter};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Task cache: the single source of truth for rendering. Replaced
    /// wholesale after every successful remote mutation.
    pub tasks: Vec<Task>,
    /// Current view filter
    pub filter: TaskFilter,
    /// Delete confirmation state
    pub pending_delete: DeleteConfirm,
    /// User-visible error message (validation or remote failure)
    pub error: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole task cache
pub fn store_replace_tasks(store: &AppStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

/// Prepend a locally generated task (no-backend fallback for add)
pub fn store_insert_local_task(store: &AppStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Flip completion of a task in place (no-backend fallback for toggle);
/// no-op when the id is not in the cache
pub fn store_flip_task(store: &AppStore, id: u64) {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == id)
        .map(|task| task.is_completed = !task.is_completed);
}

/// Remove a task by ID (no-backend fallback for delete)
pub fn store_remove_task(store: &AppStore, id: u64) {
    store.tasks().write().retain(|task| task.id != id);
}

/// Set or clear the user-visible error message
pub fn store_set_error(store: &AppStore, message: Option<String>) {
    store.error().set(message);
}
