//! HTTP request handlers.

pub mod health;
pub mod root;
