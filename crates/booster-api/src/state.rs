//! Application state shared by the router.
//!
//! Holds the immutable service configuration. Built once at startup and
//! cloned into the router; nothing in it changes for the process lifetime.

use std::path::Path;
use std::sync::Arc;

use booster_types::config::ServiceConfig;

use crate::config::{apply_overrides, load_config, ConfigOverrides};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load the config file, apply overrides, and validate the CORS policy.
    ///
    /// `required` makes a missing file an error (used when the path was
    /// given explicitly).
    pub async fn init(
        config_path: &Path,
        required: bool,
        overrides: ConfigOverrides,
    ) -> anyhow::Result<Self> {
        let config = load_config(config_path, required).await?;
        let config = apply_overrides(config, overrides)?;
        Ok(Self::new(config))
    }
}
