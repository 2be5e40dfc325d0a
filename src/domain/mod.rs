//! Domain models for the Gantt task list.
//!
//! This module contains the task record, the default collection seeded on
//! first run, and the API response types.

pub mod dto;
pub mod seed;
pub mod task;

pub use dto::{HealthResponse, MessageResponse, ReadyResponse};
pub use seed::{default_tasks, default_tasks_from};
pub use task::{Task, TaskId};
