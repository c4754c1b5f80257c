//! Task Synchronization Controller
//!
//! Orchestrates remote calls against the backend, keeps the task cache
//! consistent, and falls back to local-only mutation when no backend is
//! reachable. Every remote failure is absorbed here: components only
//! ever see store updates, never errors in flight.

use leptos::logging;
use leptos::prelude::*;

use crate::models::{validate_title, Task};
use crate::store::{
    store_flip_task, store_insert_local_task, store_remove_task, store_replace_tasks,
    store_set_error, AppStateStoreFields, AppStore,
};

/// Outcome of one remote call.
///
/// `BackendUnavailable` (no IPC bridge, or the call resolved to nothing)
/// is distinct from `Error` (the call itself failed): the former silently
/// switches to local-only semantics, the latter surfaces a message.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteOutcome<T> {
    Success(T),
    BackendUnavailable,
    Error(String),
}

/// The remote task store, plus the environment clock used for locally
/// generated fallback records.
#[allow(async_fn_in_trait)]
pub trait TaskBackend {
    async fn add_task(&self, title: &str) -> RemoteOutcome<Task>;
    async fn list_tasks(&self) -> RemoteOutcome<Vec<Task>>;
    async fn toggle_task(&self, id: u64) -> RemoteOutcome<Task>;
    async fn delete_task(&self, id: u64) -> RemoteOutcome<()>;

    /// Milliseconds since the epoch; fallback task ids derive from this.
    fn now_millis(&self) -> u64;
    /// Current time as an ISO-8601 string.
    fn now_iso(&self) -> String;
}

/// How an add request was resolved, so the form can pick its feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddStatus {
    /// Accepted by the backend, cache refetched
    Synced,
    /// No backend; record kept locally
    Local,
    /// Validation or remote failure; input left as-is
    Rejected,
}

/// Sync controller: owns the app store and a backend handle.
///
/// Each mutating operation finishes its full cache update (wholesale
/// replacement on success, in-place fallback otherwise) before the next
/// render reads the store.
#[derive(Clone, Copy)]
pub struct SyncController<B> {
    backend: B,
    store: AppStore,
}

impl<B: TaskBackend + Clone + 'static> SyncController<B> {
    pub fn new(backend: B, store: AppStore) -> Self {
        Self { backend, store }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    /// Refetch the full task list and replace the cache verbatim.
    ///
    /// On error the cache is emptied (no stale data retained). Without a
    /// backend, an empty cache is seeded with sample tasks so the UI has
    /// something to show; a non-empty local cache is left alone.
    pub async fn load(&self) {
        match self.backend.list_tasks().await {
            RemoteOutcome::Success(tasks) => {
                store_replace_tasks(&self.store, tasks);
                store_set_error(&self.store, None);
            }
            RemoteOutcome::BackendUnavailable => {
                let cache_empty = self.store.tasks().read().is_empty();
                if cache_empty {
                    store_replace_tasks(&self.store, self.sample_tasks());
                }
            }
            RemoteOutcome::Error(detail) => {
                logging::error!("list_tasks failed: {detail}");
                store_replace_tasks(&self.store, Vec::new());
                store_set_error(&self.store, Some("Failed to load tasks".to_string()));
            }
        }
    }

    /// Validate and submit a new task.
    pub async fn add(&self, raw_title: &str) -> AddStatus {
        let title = match validate_title(raw_title) {
            Ok(title) => title,
            Err(err) => {
                store_set_error(&self.store, Some(err.to_string()));
                return AddStatus::Rejected;
            }
        };

        match self.backend.add_task(&title).await {
            RemoteOutcome::Success(_) => {
                self.load().await;
                store_set_error(&self.store, None);
                AddStatus::Synced
            }
            RemoteOutcome::BackendUnavailable => {
                let task = Task::local(self.backend.now_millis(), title, self.backend.now_iso());
                store_insert_local_task(&self.store, task);
                store_set_error(&self.store, None);
                AddStatus::Local
            }
            RemoteOutcome::Error(detail) => {
                logging::error!("add_task failed: {detail}");
                store_set_error(&self.store, Some("Failed to add task".to_string()));
                AddStatus::Rejected
            }
        }
    }

    /// Toggle completion of a task.
    pub async fn toggle(&self, id: u64) {
        match self.backend.toggle_task(id).await {
            RemoteOutcome::Success(_) => self.load().await,
            RemoteOutcome::BackendUnavailable => store_flip_task(&self.store, id),
            RemoteOutcome::Error(detail) => {
                logging::error!("toggle_task failed: {detail}");
                store_set_error(&self.store, Some("Failed to update task".to_string()));
            }
        }
    }

    /// Open the delete confirmation for a task.
    pub fn request_delete(&self, id: u64) {
        self.store
            .pending_delete()
            .update(|state| *state = state.request(id));
    }

    /// Dismiss the delete confirmation without deleting.
    pub fn cancel_delete(&self) {
        self.store
            .pending_delete()
            .update(|state| *state = state.cancel());
    }

    /// Carry out the pending delete, if any. The confirmation state
    /// returns to idle on every path.
    pub async fn confirm_delete(&self) {
        let Some(id) = self.store.pending_delete().get().pending_id() else {
            return;
        };

        match self.backend.delete_task(id).await {
            RemoteOutcome::Success(()) => self.load().await,
            RemoteOutcome::BackendUnavailable => store_remove_task(&self.store, id),
            RemoteOutcome::Error(detail) => {
                logging::error!("delete_task failed: {detail}");
                store_set_error(&self.store, Some("Failed to delete task".to_string()));
            }
        }

        self.cancel_delete();
    }

    /// Demo tasks shown when starting with no backend and no local data.
    fn sample_tasks(&self) -> Vec<Task> {
        let now = self.backend.now_iso();
        vec![
            Task {
                id: 1,
                title: "Sample task 1".to_string(),
                is_completed: false,
                created_at: now.clone(),
            },
            Task {
                id: 2,
                title: "Sample completed task".to_string(),
                is_completed: true,
                created_at: now,
            },
        ]
    }
}

/// Get the sync controller from context
pub fn use_sync() -> crate::commands::AppSync {
    expect_context::<crate::commands::AppSync>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteConfirm, TaskFilter};
    use crate::store::AppState;
    use futures::executor::block_on;
    use reactive_stores::Store;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn task(id: u64, title: &str, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            is_completed: done,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[derive(Default)]
    struct MockInner {
        add: Option<RemoteOutcome<Task>>,
        list: Option<RemoteOutcome<Vec<Task>>>,
        toggle: Option<RemoteOutcome<Task>>,
        delete: Option<RemoteOutcome<()>>,
        calls: Vec<&'static str>,
    }

    /// Scripted backend: each operation replays its configured outcome
    /// and records the call.
    #[derive(Clone, Default)]
    struct MockBackend {
        inner: Rc<RefCell<MockInner>>,
    }

    impl MockBackend {
        fn with_list(self, outcome: RemoteOutcome<Vec<Task>>) -> Self {
            self.inner.borrow_mut().list = Some(outcome);
            self
        }

        fn with_add(self, outcome: RemoteOutcome<Task>) -> Self {
            self.inner.borrow_mut().add = Some(outcome);
            self
        }

        fn with_toggle(self, outcome: RemoteOutcome<Task>) -> Self {
            self.inner.borrow_mut().toggle = Some(outcome);
            self
        }

        fn with_delete(self, outcome: RemoteOutcome<()>) -> Self {
            self.inner.borrow_mut().delete = Some(outcome);
            self
        }

        fn calls(&self) -> Vec<&'static str> {
            self.inner.borrow().calls.clone()
        }
    }

    impl TaskBackend for MockBackend {
        async fn add_task(&self, _title: &str) -> RemoteOutcome<Task> {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push("add");
            inner.add.clone().unwrap_or(RemoteOutcome::BackendUnavailable)
        }

        async fn list_tasks(&self) -> RemoteOutcome<Vec<Task>> {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push("list");
            inner.list.clone().unwrap_or(RemoteOutcome::BackendUnavailable)
        }

        async fn toggle_task(&self, _id: u64) -> RemoteOutcome<Task> {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push("toggle");
            inner.toggle.clone().unwrap_or(RemoteOutcome::BackendUnavailable)
        }

        async fn delete_task(&self, _id: u64) -> RemoteOutcome<()> {
            let mut inner = self.inner.borrow_mut();
            inner.calls.push("delete");
            inner.delete.clone().unwrap_or(RemoteOutcome::BackendUnavailable)
        }

        fn now_millis(&self) -> u64 {
            1_700_000_000_000
        }

        fn now_iso(&self) -> String {
            "2024-01-01T00:00:00Z".to_string()
        }
    }

    fn controller(backend: MockBackend) -> SyncController<MockBackend> {
        SyncController::new(backend, Store::new(AppState::default()))
    }

    #[test]
    fn test_load_replaces_cache_verbatim() {
        let listed = vec![task(2, "b", true), task(1, "a", false)];
        let sync = controller(MockBackend::default().with_list(RemoteOutcome::Success(listed.clone())));

        block_on(sync.load());

        assert_eq!(sync.store().tasks().get(), listed);
        assert_eq!(sync.store().error().get(), None);
    }

    #[test]
    fn test_load_error_empties_cache_and_surfaces_message() {
        let sync = controller(
            MockBackend::default().with_list(RemoteOutcome::Error("boom".to_string())),
        );
        sync.store().tasks().set(vec![task(1, "stale", false)]);

        block_on(sync.load());

        assert!(sync.store().tasks().get().is_empty());
        assert_eq!(
            sync.store().error().get(),
            Some("Failed to load tasks".to_string())
        );
    }

    #[test]
    fn test_load_without_backend_seeds_samples_only_when_empty() {
        let backend = MockBackend::default();
        let sync = controller(backend);

        block_on(sync.load());
        let titles: Vec<String> = sync.store().tasks().get().iter().map(|t| t.title.clone()).collect();
        assert_eq!(titles, vec!["Sample task 1", "Sample completed task"]);

        // A populated local cache survives a later refresh attempt
        sync.store().tasks().set(vec![task(42, "mine", false)]);
        block_on(sync.load());
        assert_eq!(sync.store().tasks().get().len(), 1);
        assert_eq!(sync.store().tasks().get()[0].id, 42);
    }

    #[test]
    fn test_add_success_triggers_wholesale_refresh() {
        let created = task(5, "Buy milk", false);
        let backend = MockBackend::default()
            .with_add(RemoteOutcome::Success(created.clone()))
            .with_list(RemoteOutcome::Success(vec![created]));
        let sync = controller(backend.clone());

        let status = block_on(sync.add("  Buy milk  "));

        assert_eq!(status, AddStatus::Synced);
        assert_eq!(backend.calls(), vec!["add", "list"]);
        let tasks = sync.store().tasks().get();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert!(!tasks[0].is_completed);
    }

    #[test]
    fn test_add_without_backend_prepends_local_record() {
        let backend = MockBackend::default();
        let sync = controller(backend.clone());
        sync.store().tasks().set(vec![task(1, "old", false)]);

        let status = block_on(sync.add("New one"));

        assert_eq!(status, AddStatus::Local);
        // No refetch was attempted after the fallback
        assert_eq!(backend.calls(), vec!["add"]);
        let tasks = sync.store().tasks().get();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "New one");
        assert_eq!(tasks[0].id, 1_700_000_000_000);
        assert!(!tasks[0].is_completed);
        assert_eq!(tasks[1].id, 1);
    }

    #[test]
    fn test_add_invalid_title_never_reaches_backend() {
        let backend = MockBackend::default();
        let sync = controller(backend.clone());

        assert_eq!(block_on(sync.add("   ")), AddStatus::Rejected);
        assert_eq!(
            block_on(sync.add(&"x".repeat(300))),
            AddStatus::Rejected
        );

        assert!(backend.calls().is_empty());
        assert!(sync.store().tasks().get().is_empty());
        assert!(sync.store().error().get().is_some());
    }

    #[test]
    fn test_add_remote_error_leaves_cache_untouched() {
        let backend =
            MockBackend::default().with_add(RemoteOutcome::Error("io".to_string()));
        let sync = controller(backend);
        sync.store().tasks().set(vec![task(1, "old", false)]);

        let status = block_on(sync.add("fine title"));

        assert_eq!(status, AddStatus::Rejected);
        assert_eq!(sync.store().tasks().get().len(), 1);
        assert_eq!(
            sync.store().error().get(),
            Some("Failed to add task".to_string())
        );
    }

    #[test]
    fn test_toggle_success_refetches() {
        let backend = MockBackend::default()
            .with_toggle(RemoteOutcome::Success(task(1, "a", true)))
            .with_list(RemoteOutcome::Success(vec![task(1, "a", true)]));
        let sync = controller(backend.clone());
        sync.store().tasks().set(vec![task(1, "a", false)]);

        block_on(sync.toggle(1));

        assert_eq!(backend.calls(), vec!["toggle", "list"]);
        let tasks = sync.store().tasks().get();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].is_completed);
    }

    #[test]
    fn test_toggle_without_backend_flips_in_place() {
        let sync = controller(MockBackend::default());
        sync.store().tasks().set(vec![task(1, "a", false)]);

        block_on(sync.toggle(1));
        assert!(sync.store().tasks().get()[0].is_completed);

        // Double application restores the original state
        block_on(sync.toggle(1));
        assert!(!sync.store().tasks().get()[0].is_completed);

        // Unknown id is a no-op
        block_on(sync.toggle(99));
        assert_eq!(sync.store().tasks().get().len(), 1);
    }

    #[test]
    fn test_toggle_error_surfaces_message() {
        let backend =
            MockBackend::default().with_toggle(RemoteOutcome::Error("io".to_string()));
        let sync = controller(backend);
        sync.store().tasks().set(vec![task(1, "a", false)]);

        block_on(sync.toggle(1));

        assert!(!sync.store().tasks().get()[0].is_completed);
        assert_eq!(
            sync.store().error().get(),
            Some("Failed to update task".to_string())
        );
    }

    #[test]
    fn test_delete_flow_request_cancel_then_confirm() {
        let sync = controller(MockBackend::default());
        sync.store()
            .tasks()
            .set(vec![task(1, "keep", false), task(2, "drop", false)]);

        // Request then cancel: nothing deleted
        sync.request_delete(2);
        assert_eq!(sync.store().pending_delete().get(), DeleteConfirm::Pending(2));
        sync.cancel_delete();
        assert_eq!(sync.store().pending_delete().get(), DeleteConfirm::Idle);
        assert_eq!(sync.store().tasks().get().len(), 2);

        // Request again and confirm: record filtered out locally
        sync.request_delete(2);
        block_on(sync.confirm_delete());
        assert_eq!(sync.store().pending_delete().get(), DeleteConfirm::Idle);
        let ids: Vec<u64> = sync.store().tasks().get().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_confirm_delete_success_refetches() {
        let backend = MockBackend::default()
            .with_delete(RemoteOutcome::Success(()))
            .with_list(RemoteOutcome::Success(vec![task(1, "keep", false)]));
        let sync = controller(backend.clone());
        sync.store()
            .tasks()
            .set(vec![task(1, "keep", false), task(2, "drop", false)]);

        sync.request_delete(2);
        block_on(sync.confirm_delete());

        assert_eq!(backend.calls(), vec!["delete", "list"]);
        let ids: Vec<u64> = sync.store().tasks().get().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1]);
        assert_eq!(sync.store().pending_delete().get(), DeleteConfirm::Idle);
    }

    #[test]
    fn test_confirm_delete_error_keeps_cache_and_resets_machine() {
        let backend =
            MockBackend::default().with_delete(RemoteOutcome::Error("io".to_string()));
        let sync = controller(backend);
        sync.store().tasks().set(vec![task(2, "drop", false)]);

        sync.request_delete(2);
        block_on(sync.confirm_delete());

        assert_eq!(sync.store().tasks().get().len(), 1);
        assert_eq!(sync.store().pending_delete().get(), DeleteConfirm::Idle);
        assert_eq!(
            sync.store().error().get(),
            Some("Failed to delete task".to_string())
        );
    }

    #[test]
    fn test_confirm_delete_without_pending_is_noop() {
        let backend = MockBackend::default();
        let sync = controller(backend.clone());
        sync.store().tasks().set(vec![task(1, "keep", false)]);

        block_on(sync.confirm_delete());

        assert!(backend.calls().is_empty());
        assert_eq!(sync.store().tasks().get().len(), 1);
    }

    #[test]
    fn test_filter_is_pure_view_state() {
        let backend = MockBackend::default();
        let sync = controller(backend.clone());
        sync.store().filter().set(TaskFilter::Completed);

        // Changing the filter issues no remote calls and leaves the cache alone
        assert!(backend.calls().is_empty());
        assert_eq!(sync.store().filter().get(), TaskFilter::Completed);
    }
}
