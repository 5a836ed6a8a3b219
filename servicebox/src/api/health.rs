//! `/health` handler
//!
//! 503 while booting, 200 with uptime and request counter once ready.

use crate::common::types::{HealthyStatus, StartingStatus};
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET|POST /health
pub async fn health(State(state): State<AppState>) -> Response {
    match state.runtime.uptime() {
        Some(uptime) => Json(HealthyStatus::new(
            &state.service.name,
            uptime.as_secs(),
            state.runtime.requests_served(),
        ))
        .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(StartingStatus::new(&state.service.name)),
        )
            .into_response(),
    }
}
