//! Error handling module.
//!
//! This module provides unified error handling with HTTP status code mapping
//! and the `{"error": ...}` response body the front end expects.

pub mod codes;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::domain::TaskId;

pub use codes::ErrorCode;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Request body exceeds the size limit.
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// Request body could not be parsed as a task collection.
    #[error("Failed to parse JSON: {0}")]
    MalformedBody(String),

    /// Missing or non-integer task id.
    #[error("Invalid task id: {0}")]
    InvalidTaskId(String),

    /// HTTP method not supported.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

}

impl AppError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::BadRequest(_) => ErrorCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => ErrorCode::PAYLOAD_TOO_LARGE,
            Self::MalformedBody(_) => ErrorCode::MALFORMED_BODY,
            Self::InvalidTaskId(_) => ErrorCode::INVALID_TASK_ID,
            Self::MethodNotAllowed => ErrorCode::METHOD_NOT_ALLOWED,
            Self::Storage(e) if e.is_not_found() => ErrorCode::TASK_NOT_FOUND,
            Self::Storage(_) => ErrorCode::STORAGE_ERROR,
        }
    }

    /// Get the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::MalformedBody(_) | Self::InvalidTaskId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Storage(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code().as_i32();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(
                error_code = code,
                status = %status,
                message = %message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                error_code = code,
                status = %status,
                message = %message,
                "Request rejected"
            );
        }

        let body = Json(json!({
            "error": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

/// Storage-specific error type.
///
/// Each variant names the step that failed so the message tells the caller
/// whether the file, the document, or the database was at fault.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading the backing file failed.
    #[error("Failed to read task file: {0}")]
    Read(String),

    /// The stored document is not a valid task collection.
    #[error("Failed to parse task file: {0}")]
    Parse(String),

    /// Serializing the collection failed.
    #[error("Failed to serialize tasks: {0}")]
    Serialize(String),

    /// Writing the backing file failed.
    #[error("Failed to write task file: {0}")]
    Write(String),

    /// No task with the given id.
    #[error("Task {0} not found")]
    NotFound(TaskId),

    /// Opening the database failed.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Creating the schema or counting rows failed.
    #[error("Schema setup failed: {0}")]
    Migration(String),

    /// Beginning or committing a transaction failed.
    #[error("Transaction failed: {0}")]
    Transaction(String),

    /// Preparing a statement failed.
    #[error("Failed to prepare statement: {0}")]
    Prepare(String),

    /// Executing a statement failed.
    #[error("Statement failed: {0}")]
    Exec(String),

    /// Issuing a read query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// A row could not be decoded into a task.
    #[error("Failed to scan row: {0}")]
    Scan(String),

    /// Lock acquisition failed.
    #[error("Failed to acquire lock: {0}")]
    LockFailed(String),

    /// Backend not available.
    #[error("Storage backend unavailable")]
    Unavailable,
}

impl StorageError {
    /// Whether this error means the requested task does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type alias using `StorageError`.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
