//! Router setup and configuration.

use axum::{Router, body::Body, http::Request, routing::get};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, tasks};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready));

    // Task collection routes
    let task_routes = Router::new().route(
        "/tasks",
        get(tasks::list_tasks)
            .post(tasks::replace_tasks)
            .delete(tasks::delete_task)
            .fallback(tasks::method_not_allowed),
    );

    // Front end page
    let index = ServeFile::new(&state.config.server.index_file);

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("-");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id());

    // Combine all routes
    Router::new()
        .route_service("/", index)
        .merge(health_routes)
        .nest("/api", task_routes)
        .layer(middleware)
        .with_state(state)
}
