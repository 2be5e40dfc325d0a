//! File-based storage backend.
//!
//! This backend stores the task collection as one pretty-printed JSON array.
//! Suitable for development and single-node deployments.
//!
//! Files:
//! ```text
//! {path}          the task document
//! {path}.lock     advisory lock held during every read or write
//! {path}.tmp      next document, renamed over {path} once fully written
//! ```

mod document;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::FileStorageConfig;
use crate::domain::{Task, TaskId, default_tasks};
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::{TaskStore, remove_task};

use document::{DocumentLock, read_document, sibling, write_document};

/// File-based task store.
pub struct FileTaskStore {
    /// Task document.
    path: PathBuf,
    /// Advisory lock file guarding `path` across processes.
    lock_path: PathBuf,
    /// Serializes document access within this process.
    lock: Mutex<()>,
}

impl FileTaskStore {
    /// Create a new file task store.
    ///
    /// The document itself is created lazily by the first [`TaskStore::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created.
    pub fn new(config: &FileStorageConfig) -> StorageResult<Self> {
        let path = config.path.clone();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Write(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        Ok(Self {
            lock_path: sibling(&path, ".lock"),
            path,
            lock: Mutex::new(()),
        })
    }

    /// Path of the task document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, seeding the defaults if it does not exist.
    ///
    /// Callers must hold both locks.
    fn load_or_seed(&self) -> StorageResult<Vec<Task>> {
        if let Some(tasks) = read_document(&self.path)? {
            debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
            return Ok(tasks);
        }

        let tasks = default_tasks();
        write_document(&self.path, &tasks)?;
        info!(path = %self.path.display(), count = tasks.len(), "Seeded default tasks");

        Ok(tasks)
    }

    fn directory(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

#[async_trait]
impl TaskStore for FileTaskStore {
    async fn load(&self) -> StorageResult<Vec<Task>> {
        let _guard = self.lock.lock().await;
        let _file_lock = DocumentLock::acquire(&self.lock_path)?;

        self.load_or_seed()
    }

    async fn replace_all(&self, tasks: &[Task]) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        let _file_lock = DocumentLock::acquire(&self.lock_path)?;

        write_document(&self.path, tasks)?;
        info!(path = %self.path.display(), count = tasks.len(), "Replaced task collection");

        Ok(())
    }

    async fn delete_by_id(&self, id: TaskId) -> StorageResult<()> {
        let _guard = self.lock.lock().await;
        let _file_lock = DocumentLock::acquire(&self.lock_path)?;

        let mut tasks = self.load_or_seed()?;
        remove_task(&mut tasks, id)?;
        write_document(&self.path, &tasks)?;
        info!(path = %self.path.display(), id, remaining = tasks.len(), "Deleted task");

        Ok(())
    }

    async fn health_check(&self) -> StorageResult<()> {
        let dir = self.directory();
        if !dir.exists() {
            return Err(StorageError::Unavailable);
        }

        let _guard = self.lock.lock().await;
        let _file_lock = DocumentLock::acquire(&self.lock_path)?;

        let test_file = sibling(&self.path, ".health_check");
        tokio::fs::write(&test_file, b"ok")
            .await
            .map_err(|e| StorageError::Write(format!("Health check failed: {e}")))?;
        tokio::fs::remove_file(&test_file)
            .await
            .map_err(|e| StorageError::Write(format!("Health check cleanup failed: {e}")))?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
