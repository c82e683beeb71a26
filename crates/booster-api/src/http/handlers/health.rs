//! GET /health - Liveness signal.
//!
//! Always reports healthy. No dependency is probed; a response at all means
//! the process is accepting and dispatching requests.

use axum::Json;

use booster_types::payload::HealthStatus;

/// GET /health - `{"status":"healthy"}`.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
