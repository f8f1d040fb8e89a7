use crate::dtos::OsResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Host name of the machine (or pod) serving the request.
pub fn host_name() -> String {
    hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to read host name");
            "unknown".to_string()
        })
}

pub async fn os_info(State(state): State<AppState>) -> Json<OsResponse> {
    Json(OsResponse {
        os: host_name(),
        env: state.environment.clone(),
    })
}
