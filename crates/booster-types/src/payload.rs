//! JSON bodies returned by the HTTP endpoints.
//!
//! Every body here is a fixed value; constructors exist so handlers and tests
//! share one definition of the wire shape.

use serde::Serialize;

/// Greeting served at `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to Prompt Booster API";

/// Liveness value served at `GET /health`.
pub const HEALTHY: &str = "healthy";

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

impl WelcomeResponse {
    pub fn new() -> Self {
        Self {
            message: WELCOME_MESSAGE,
        }
    }
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// `{"status": "healthy"}`
///
/// Liveness only: no dependency is probed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self { status: HEALTHY }
    }
}

/// `{"detail": "..."}` body used for routing errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}
