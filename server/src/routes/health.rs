//! Health endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::services::health::{HealthReport, run_checks};
use crate::state::AppState;

/// `GET /api/health`: component checks. Always 200; the body carries status.
pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(run_checks(&state.pool).await)
}

/// `GET /healthz`: liveness only.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
