//! Storage layer module.
//!
//! This module provides a trait-based store abstraction so the JSON file and
//! `SQLite` backends can be used without changing the HTTP layer.

pub mod factory;
pub mod file;
pub mod memory;
pub mod sqlite;
pub mod traits;

pub use crate::error::StorageError;
pub use factory::create_store;
pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;
pub use sqlite::SqliteTaskStore;
pub use traits::TaskStore;
