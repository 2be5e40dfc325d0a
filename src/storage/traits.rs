//! Storage trait definitions.
//!
//! The HTTP layer only sees [`TaskStore`], so the file and `SQLite` backends
//! can be swapped by configuration and tests can substitute an in-memory one.

use async_trait::async_trait;

use crate::domain::{Task, TaskId};
use crate::error::StorageResult;

/// Persistence contract for the task collection.
///
/// Every write replaces the whole collection; there is no per-record update.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Backends seed the default tasks the first time they are used, so a
    /// fresh store never returns an empty collection unless one was saved.
    async fn load(&self) -> StorageResult<Vec<Task>>;

    /// Atomically replace the stored collection with `tasks`.
    ///
    /// On failure the previously stored collection is left unchanged.
    async fn replace_all(&self, tasks: &[Task]) -> StorageResult<()>;

    /// Remove the task with `id`.
    ///
    /// Fails with [`StorageError::NotFound`](crate::error::StorageError::NotFound)
    /// without touching the collection when no such task exists.
    async fn delete_by_id(&self, id: TaskId) -> StorageResult<()>;

    /// Check if the storage backend is healthy and reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Get the storage backend name.
    fn backend_name(&self) -> &'static str;
}

/// Remove the task with `id` from `tasks`, keeping the order of the rest.
///
/// Shared by the backends whose delete is a load-filter-save cycle.
pub(crate) fn remove_task(tasks: &mut Vec<Task>, id: TaskId) -> StorageResult<Task> {
    let index = tasks
        .iter()
        .position(|task| task.id == id)
        .ok_or(crate::error::StorageError::NotFound(id))?;
    Ok(tasks.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(1, "a", "2026-01-01", 1, "#000000", 3),
            Task::new(2, "b", "2026-01-02", 2, "#111111", 1),
            Task::new(3, "c", "2026-01-03", 3, "#222222", 2),
        ]
    }

    #[test]
    fn test_remove_task_keeps_order() {
        let mut tasks = sample();
        let removed = remove_task(&mut tasks, 2).unwrap();

        assert_eq!(removed.name, "b");
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_missing_task_leaves_collection() {
        let mut tasks = sample();
        let err = remove_task(&mut tasks, 99).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(tasks, sample());
    }
}
