//! Shared types for the Prompt Booster API.
//!
//! Configuration records, response payloads, and their associated error
//! types. Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod payload;
