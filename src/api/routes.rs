//! Router assembly for the hand query service

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::hands::{handlers, HandsState};
use crate::metrics::METRICS;

/// Build the service router
///
/// Only `/hands/left`, `/hands/right` and `/metrics` are routed; any other
/// path falls through to the listener's default 404.
pub fn build_router(state: HandsState) -> Router {
    Router::new()
        .route("/hands/left", get(handlers::get_left_hand))
        .route("/hands/right", get(handlers::get_right_hand))
        .route("/metrics", get(metrics_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Prometheus text exposition
///
/// GET /metrics
async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        METRICS.export_prometheus(),
    )
}
