//! HTTP layer for the Prompt Booster API.
//!
//! Axum router with a credentialed CORS allow-list, request tracing, and two
//! static endpoints.

pub mod cors;
pub mod error;
pub mod handlers;
pub mod router;
