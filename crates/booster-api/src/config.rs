//! Service configuration loader.
//!
//! Reads a TOML file into [`ServiceConfig`], then layers command-line and
//! environment overrides on top. The CORS allow-list is validated last so
//! that overrides are checked too.

use std::path::Path;

use booster_types::config::ServiceConfig;
use booster_types::error::ConfigError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "prompt-booster.toml";

/// Values that take priority over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Replaces the whole allow-list when non-empty.
    pub cors_origins: Vec<String>,
}

/// Load configuration from `path`.
///
/// - If the file does not exist and `required` is false, returns
///   [`ServiceConfig::default()`].
/// - If the file does not exist and `required` is true, returns
///   [`ConfigError::Read`].
/// - If the file exists but cannot be read or parsed, returns an error rather
///   than falling back, so a broken allow-list never silently becomes the
///   development default.
pub async fn load_config(path: &Path, required: bool) -> Result<ServiceConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!("No config file found at {}, using defaults", path.display());
            return Ok(ServiceConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config = toml::from_str::<ServiceConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply overrides and validate the result.
pub fn apply_overrides(
    mut config: ServiceConfig,
    overrides: ConfigOverrides,
) -> Result<ServiceConfig, ConfigError> {
    if let Some(host) = overrides.host {
        config.server.host = host;
    }
    if let Some(port) = overrides.port {
        config.server.port = port;
    }
    if !overrides.cors_origins.is_empty() {
        config.cors.allowed_origins = overrides.cors_origins;
    }

    config.cors.validate()?;
    Ok(config)
}

/// Split a comma-separated origin list, dropping blanks.
///
/// Used for `PROMPT_BOOSTER_CORS_ORIGINS`.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
