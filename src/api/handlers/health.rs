//! Health check handlers.

use axum::{Json, extract::State, http::StatusCode};
use tracing::warn;

use crate::api::state::AppState;
use crate::domain::{HealthResponse, ReadyResponse};

/// Liveness probe - always returns 200 if the service is running.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe - checks if the task store can serve requests.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let ready = match state.store.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(backend = state.store.backend_name(), error = %e, "Store health check failed");
            false
        }
    };

    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = Json(ReadyResponse {
        ready,
        backend: state.store.backend_name().to_string(),
    });

    (status_code, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::storage::MemoryTaskStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ready_with_healthy_store() {
        let state = AppState::new(
            Arc::new(AppConfig::default()),
            Arc::new(MemoryTaskStore::default()),
        );

        let (status, Json(body)) = ready(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.ready);
        assert_eq!(body.backend, "memory");
    }
}
