//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, SystemInfo};
use crate::state::AppState;

/// Returns service availability and build information.
///
/// # Endpoint
///
/// `GET /v1/healthcheck`
pub async fn healthcheck_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "available",
        system_info: SystemInfo {
            environment: state.config.env.clone(),
            version: env!("CARGO_PKG_VERSION"),
        },
    })
}
