//! In-memory task store.
//!
//! Holds the collection in process memory only. Used where a real backend
//! would get in the way, such as HTTP handler tests.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::{Task, TaskId};
use crate::error::StorageResult;
use crate::storage::traits::{TaskStore, remove_task};

/// In-memory implementation of [`TaskStore`].
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    /// Create a store holding `tasks`.
    #[must_use]
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RwLock::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn load(&self) -> StorageResult<Vec<Task>> {
        Ok(self.tasks.read().clone())
    }

    async fn replace_all(&self, tasks: &[Task]) -> StorageResult<()> {
        *self.tasks.write() = tasks.to_vec();
        Ok(())
    }

    async fn delete_by_id(&self, id: TaskId) -> StorageResult<()> {
        let mut tasks = self.tasks.write();
        remove_task(&mut tasks, id)?;
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_contract() {
        let store = MemoryTaskStore::new(vec![
            Task::new(1, "a", "2026-01-01", 1, "#000000", 2),
            Task::new(2, "b", "2026-01-02", 1, "#000000", 1),
        ]);

        store.delete_by_id(1).await.unwrap();
        assert_eq!(store.load().await.unwrap().len(), 1);
        assert!(store.delete_by_id(1).await.unwrap_err().is_not_found());

        store.replace_all(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }
}
