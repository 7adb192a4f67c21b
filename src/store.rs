//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative in-memory task collection for the current dashboard
//! view: fully replaced on fetch/search, incrementally patched on local
//! mutations and on live events. Matching identifiers are last-write-wins.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::filter::StatusFilter;
use crate::models::Task;

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashState {
    /// Tasks for the current view
    pub tasks: Vec<Task>,
    /// Status filter applied to the list
    pub filter: StatusFilter,
    /// Search text applied to the list
    pub query: String,
}

/// Type alias for the store
pub type DashStore = Store<DashState>;

/// Get the dashboard store from context
pub fn use_dash_store() -> DashStore {
    expect_context::<DashStore>()
}

// ========================
// Patch Helpers
// ========================

/// Replace the task with a matching id, or append
///
/// Applying the same task twice leaves one entry, so the optimistic patch
/// and a delivered echo of the same event cannot double-apply.
pub fn upsert_task(tasks: &mut Vec<Task>, task: Task) {
    match tasks.iter_mut().find(|t| t.id == task.id) {
        Some(existing) => *existing = task,
        None => tasks.push(task),
    }
}

/// Remove the task with a matching id, if present
pub fn remove_task(tasks: &mut Vec<Task>, task_id: &str) {
    tasks.retain(|task| task.id != task_id);
}

// ========================
// Store Wrappers
// ========================
//
// try_write so a continuation that resolves after the dashboard unmounts is
// a no-op instead of a write to a disposed store.

/// Replace the whole collection (fetch/search result)
pub fn store_set_tasks(store: &DashStore, tasks: Vec<Task>) {
    if let Some(mut list) = store.tasks().try_write() {
        *list = tasks;
    }
}

/// Upsert one task in the store by id
pub fn store_upsert_task(store: &DashStore, task: Task) {
    if let Some(mut list) = store.tasks().try_write() {
        upsert_task(&mut list, task);
    }
}

/// Remove one task from the store by id
pub fn store_remove_task(store: &DashStore, task_id: &str) {
    if let Some(mut list) = store.tasks().try_write() {
        remove_task(&mut list, task_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn make_task(id: &str, title: &str, status: TaskStatus) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            status,
        }
    }

    #[test]
    fn test_upsert_appends_new_id() {
        let mut tasks = vec![make_task("1", "Buy milk", TaskStatus::Pending)];
        upsert_task(&mut tasks, make_task("2", "Water plants", TaskStatus::Pending));
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn test_upsert_replaces_matching_id() {
        let mut tasks = vec![make_task("1", "Buy milk", TaskStatus::Pending)];
        upsert_task(&mut tasks, make_task("1", "Buy milk", TaskStatus::Completed));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn test_upsert_twice_keeps_one_entry() {
        // The optimistic patch and an echoed created event carry the same task
        let mut tasks = Vec::new();
        let task = make_task("1", "Buy milk", TaskStatus::Pending);
        upsert_task(&mut tasks, task.clone());
        upsert_task(&mut tasks, task);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut tasks = vec![
            make_task("1", "Buy milk", TaskStatus::Pending),
            make_task("2", "Water plants", TaskStatus::Pending),
        ];
        remove_task(&mut tasks, "1");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
        // Removing an absent id is a no-op
        remove_task(&mut tasks, "1");
        assert_eq!(tasks.len(), 1);
    }
}
