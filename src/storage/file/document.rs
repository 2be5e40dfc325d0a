//! On-disk task document.
//!
//! The collection lives in a single pretty-printed JSON file. Writers build
//! the new document in a sibling temp file and rename it over the old one,
//! so a reader never sees a half-written array. A sibling `.lock` file
//! carries an advisory `flock` that keeps other processes out of the
//! read-modify-write window.
//!
//! Note: File locks may not work correctly on all network filesystems.

use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::Task;
use crate::error::{StorageError, StorageResult};

/// Exclusive advisory lock on the document's `.lock` sibling.
///
/// Released when dropped.
pub(super) struct DocumentLock {
    file: File,
}

impl DocumentLock {
    /// Block until the lock file at `path` is held exclusively.
    pub(super) fn acquire(path: &Path) -> StorageResult<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| StorageError::LockFailed(format!("{}: {e}", path.display())))?;

        file.lock_exclusive()
            .map_err(|e| StorageError::LockFailed(format!("{}: {e}", path.display())))?;

        Ok(Self { file })
    }
}

impl Drop for DocumentLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Path next to `path` with `suffix` appended to the file name.
pub(super) fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map_or_else(|| OsString::from("tasks"), ToOwned::to_owned);
    name.push(suffix);
    path.with_file_name(name)
}

/// Read and parse the document.
///
/// Returns `None` when the file does not exist yet.
pub(super) fn read_document(path: &Path) -> StorageResult<Option<Vec<Task>>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StorageError::Read(format!("{}: {e}", path.display()))),
    };

    let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| StorageError::Parse(format!("{}: {e}", path.display())))?;

    Ok(Some(tasks))
}

/// Serialize `tasks` and atomically replace the document with it.
///
/// Serialization happens before the file system is touched, so a
/// serialization failure leaves the old document in place.
pub(super) fn write_document(path: &Path, tasks: &[Task]) -> StorageResult<()> {
    let json =
        serde_json::to_vec_pretty(tasks).map_err(|e| StorageError::Serialize(e.to_string()))?;

    let tmp_path = sibling(path, ".tmp");
    let write_err = |e: std::io::Error| StorageError::Write(format!("{}: {e}", path.display()));

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(write_err)?;
    file.write_all(&json).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;
    drop(file);

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Task> {
        vec![
            Task::new(101, "Task A", "2026-02-01", 3, "#AAAAAA", 5),
            Task::new(102, "Task B", "2026-02-04", 2, "#BBBBBB", 1),
        ]
    }

    #[test]
    fn test_sibling_paths() {
        let path = Path::new("/data/tasks.json");
        assert_eq!(sibling(path, ".lock"), PathBuf::from("/data/tasks.json.lock"));
        assert_eq!(sibling(path, ".tmp"), PathBuf::from("/data/tasks.json.tmp"));
    }

    #[test]
    fn test_read_missing_document() {
        let temp = TempDir::new().unwrap();
        let result = read_document(&temp.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_is_pretty_printed_and_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");

        write_document(&path, &sample()).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains("\"durationDays\": 3"));
        assert!(!sibling(&path, ".tmp").exists());

        assert_eq!(read_document(&path).unwrap(), Some(sample()));
    }

    #[test]
    fn test_read_malformed_document() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasks.json");
        std::fs::write(&path, "[{\"id\": 1,").unwrap();

        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn test_read_directory_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = read_document(temp.path()).unwrap_err();
        assert!(matches!(err, StorageError::Read(_) | StorageError::Parse(_)));
    }

    #[test]
    fn test_lock_is_released_on_drop() {
        let temp = TempDir::new().unwrap();
        let lock_path = temp.path().join("tasks.json.lock");

        let guard = DocumentLock::acquire(&lock_path).unwrap();
        let probe = File::open(&lock_path).unwrap();
        assert!(probe.try_lock_exclusive().is_err());

        drop(guard);
        assert!(probe.try_lock_exclusive().is_ok());
        FileExt::unlock(&probe).unwrap();
    }
}
