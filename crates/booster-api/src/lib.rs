//! Prompt Booster API service.
//!
//! Loads the service configuration, builds the axum router (CORS policy,
//! request tracing, `/` and `/health`) and hands it to the server runner in
//! `main.rs`.

pub mod config;
pub mod http;
pub mod state;
