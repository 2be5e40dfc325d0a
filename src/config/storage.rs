//! Storage configuration.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Pretty-printed JSON document on disk.
    #[default]
    File,
    /// `SQLite` database with a single `tasks` table.
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type.
    #[serde(default)]
    pub backend: StorageBackend,

    /// File storage configuration.
    #[serde(default)]
    pub file: FileStorageConfig,

    /// `SQLite` storage configuration.
    #[serde(default)]
    pub sqlite: SqliteStorageConfig,
}

impl StorageConfig {
    /// Validate the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration fields are missing for the selected backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.backend {
            StorageBackend::File => {
                if self.file.path.as_os_str().is_empty() {
                    return Err(ConfigError::Message(
                        "storage.file.path cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
            StorageBackend::Sqlite => {
                if self.sqlite.path.as_os_str().is_empty() {
                    return Err(ConfigError::Message(
                        "storage.sqlite.path cannot be empty".to_string(),
                    ));
                }
                if self.sqlite.max_connections == 0 {
                    return Err(ConfigError::Message(
                        "storage.sqlite.max_connections cannot be 0".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// File storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FileStorageConfig {
    /// Path of the JSON document holding the task collection.
    #[serde(default = "default_file_path")]
    pub path: PathBuf,
}

fn default_file_path() -> PathBuf {
    PathBuf::from("./tasks.json")
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            path: default_file_path(),
        }
    }
}

/// `SQLite` storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteStorageConfig {
    /// Database file, created if missing.
    #[serde(default = "default_sqlite_path")]
    pub path: PathBuf,

    /// Connection pool maximum size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_sqlite_path() -> PathBuf {
    PathBuf::from("./gantt.db")
}

const fn default_max_connections() -> u32 {
    5
}

impl Default for SqliteStorageConfig {
    fn default() -> Self {
        Self {
            path: default_sqlite_path(),
            max_connections: default_max_connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_display() {
        assert_eq!(StorageBackend::File.to_string(), "file");
        assert_eq!(StorageBackend::Sqlite.to_string(), "sqlite");
    }

    #[test]
    fn test_storage_config_validation() {
        let config = StorageConfig::default();
        assert!(config.validate().is_ok());

        let mut config = StorageConfig::default();
        config.backend = StorageBackend::Sqlite;
        config.sqlite.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = StorageConfig::default();
        config.file.path = PathBuf::new();
        assert!(config.validate().is_err());
    }
}
