//! Request extractors that reject with [`AppError`](crate::error::AppError)
//! so every failure carries a JSON error body.

mod task;

pub use task::{TaskCollection, TaskIdQuery};
