//! Task request extractors.

use std::future::Future;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{StatusCode, Uri, request::Parts};

use crate::domain::{Task, TaskId};
use crate::error::AppError;

/// Full task collection parsed from a JSON request body.
///
/// The body is parsed regardless of its `Content-Type`, matching what the
/// front end sends.
#[derive(Debug, Clone)]
pub struct TaskCollection(pub Vec<Task>);

impl<S> FromRequest<S> for TaskCollection
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(body_error)?;

        let tasks = serde_json::from_slice(&body)
            .map_err(|e| AppError::MalformedBody(e.to_string()))?;

        Ok(Self(tasks))
    }
}

/// Body-limit rejections keep their 413; anything else is an unreadable body.
fn body_error(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::BadRequest(format!("Failed to read request body: {rejection}"))
    }
}

/// Task id taken from the `id` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskIdQuery(pub TaskId);

impl<S> FromRequestParts<S> for TaskIdQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        std::future::ready(parse_task_id(&parts.uri).map(Self))
    }
}

/// Extract and parse the `id` query parameter from the URI.
fn parse_task_id(uri: &Uri) -> Result<TaskId, AppError> {
    let raw = uri
        .query()
        .and_then(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .find(|(k, _)| k == "id")
                .map(|(_, v)| v.into_owned())
        })
        .ok_or_else(|| AppError::InvalidTaskId("missing id parameter".to_string()))?;

    raw.trim()
        .parse()
        .map_err(|_| AppError::InvalidTaskId(format!("'{raw}' is not an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn uri(s: &str) -> Uri {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_task_id() {
        assert_eq!(parse_task_id(&uri("/api/tasks?id=42")).unwrap(), 42);
        assert_eq!(parse_task_id(&uri("/api/tasks?x=1&id=-3")).unwrap(), -3);
    }

    #[test]
    fn test_parse_task_id_missing() {
        let err = parse_task_id(&uri("/api/tasks")).unwrap_err();
        assert!(matches!(err, AppError::InvalidTaskId(_)));

        let err = parse_task_id(&uri("/api/tasks?name=x")).unwrap_err();
        assert!(matches!(err, AppError::InvalidTaskId(_)));
    }

    #[test]
    fn test_parse_task_id_not_integer() {
        let err = parse_task_id(&uri("/api/tasks?id=abc")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid task id: 'abc' is not an integer");

        assert!(parse_task_id(&uri("/api/tasks?id=")).is_err());
        assert!(parse_task_id(&uri("/api/tasks?id=1.5")).is_err());
    }

    #[tokio::test]
    async fn test_task_collection_without_content_type() {
        let body = r##"[{"id":1,"name":"a","start":"2026-01-01","durationDays":2,"color":"#000000","priority":1}]"##;
        let req = Request::builder()
            .method("POST")
            .uri("/api/tasks")
            .body(Body::from(body))
            .unwrap();

        let TaskCollection(tasks) = TaskCollection::from_request(req, &()).await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].duration_days, 2);
    }

    #[tokio::test]
    async fn test_task_collection_malformed() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/tasks")
            .body(Body::from("{not json"))
            .unwrap();

        let err = TaskCollection::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_task_collection_rejects_single_object() {
        let body = r##"{"id":1,"name":"a","start":"2026-01-01","durationDays":2,"color":"#000000","priority":1}"##;
        let req = Request::builder()
            .method("POST")
            .uri("/api/tasks")
            .body(Body::from(body))
            .unwrap();

        let err = TaskCollection::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::MalformedBody(_)));
    }

    #[tokio::test]
    async fn test_task_collection_over_body_limit() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/tasks")
            .body(Body::from(vec![b' '; 3 * 1024 * 1024]))
            .unwrap();

        let err = TaskCollection::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
