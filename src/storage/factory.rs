//! Storage backend factory.
//!
//! Creates the appropriate task store based on configuration.

use std::sync::Arc;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppError;
use crate::storage::file::FileTaskStore;
use crate::storage::sqlite::SqliteTaskStore;
use crate::storage::traits::TaskStore;

/// Create a task store based on configuration.
///
/// # Arguments
///
/// * `config` - Storage configuration
///
/// # Returns
///
/// An `Arc<dyn TaskStore>` pointing to the configured backend.
///
/// # Errors
///
/// Returns an error if the storage backend cannot be initialized.
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn TaskStore>, AppError> {
    match config.backend {
        StorageBackend::File => {
            let store = FileTaskStore::new(&config.file)?;

            // Verify storage is healthy
            store.health_check().await?;

            Ok(Arc::new(store))
        }
        StorageBackend::Sqlite => {
            let store = SqliteTaskStore::open(&config.sqlite).await?;
            Ok(Arc::new(store))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileStorageConfig, SqliteStorageConfig};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_file_store() {
        let temp_dir = TempDir::new().unwrap();

        let config = StorageConfig {
            backend: StorageBackend::File,
            file: FileStorageConfig {
                path: temp_dir.path().join("tasks.json"),
            },
            ..Default::default()
        };

        let store = create_store(&config).await.unwrap();
        assert_eq!(store.backend_name(), "file");
    }

    #[tokio::test]
    async fn test_create_sqlite_store() {
        let temp_dir = TempDir::new().unwrap();

        let config = StorageConfig {
            backend: StorageBackend::Sqlite,
            sqlite: SqliteStorageConfig {
                path: temp_dir.path().join("gantt.db"),
                max_connections: 1,
            },
            ..Default::default()
        };

        let store = create_store(&config).await.unwrap();
        assert_eq!(store.backend_name(), "sqlite");
        assert_eq!(store.load().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_sqlite_store_unopenable_path() {
        let temp_dir = TempDir::new().unwrap();

        // A directory cannot be opened as a database file
        let config = StorageConfig {
            backend: StorageBackend::Sqlite,
            sqlite: SqliteStorageConfig {
                path: temp_dir.path().to_path_buf(),
                max_connections: 1,
            },
            ..Default::default()
        };

        assert!(create_store(&config).await.is_err());
    }
}
