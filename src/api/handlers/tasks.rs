//! Task collection handlers.
//!
//! `GET` returns the stored collection, `POST` replaces it wholesale and
//! `DELETE ?id=` removes one task. Every other method is answered with 405.

use axum::{Json, extract::State};
use tracing::info;

use crate::api::extractors::{TaskCollection, TaskIdQuery};
use crate::api::state::AppState;
use crate::domain::{MessageResponse, Task};
use crate::error::AppError;

type Result<T> = std::result::Result<T, AppError>;

/// List all tasks.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state.store.load().await?;
    Ok(Json(tasks))
}

/// Replace the stored collection with the request body.
///
/// # Errors
///
/// Returns an error if the body is not a task array or the store write fails.
pub async fn replace_tasks(
    State(state): State<AppState>,
    TaskCollection(tasks): TaskCollection,
) -> Result<Json<MessageResponse>> {
    state.store.replace_all(&tasks).await?;

    info!(
        backend = state.store.backend_name(),
        count = tasks.len(),
        "Task collection saved"
    );
    Ok(Json(MessageResponse::new("Tasks saved")))
}

/// Delete the task named by the `id` query parameter.
///
/// # Errors
///
/// Returns an error if `id` is missing or invalid, no such task exists, or
/// the store write fails.
pub async fn delete_task(
    State(state): State<AppState>,
    TaskIdQuery(id): TaskIdQuery,
) -> Result<Json<MessageResponse>> {
    state.store.delete_by_id(id).await?;
    Ok(Json(MessageResponse::new(format!("Task {id} deleted"))))
}

/// Fallback for unsupported methods on the task collection.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
