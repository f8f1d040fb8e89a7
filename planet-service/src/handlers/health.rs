use crate::dtos::StatusResponse;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use service_core::middleware::get_metrics;

/// Liveness probe. Never consults the store.
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse { status: "live" })
}

/// Readiness probe. Unconditional unless `ready_requires_store` is set.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.ready_requires_store {
        if let Err(e) = state.lookup.store_reachable().await {
            tracing::warn!(error = %e, "Readiness check failed: store unreachable");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "unavailable",
                }),
            );
        }
    }

    (StatusCode::OK, Json(StatusResponse { status: "ready" }))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.lookup.store_reachable().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "planet-service",
                "version": env!("CARGO_PKG_VERSION"),
                "store": "reachable"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "unhealthy",
                "service": "planet-service",
                "version": env!("CARGO_PKG_VERSION"),
                "store": "unreachable",
                "error": e.to_string()
            })),
        ),
    }
}

pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
