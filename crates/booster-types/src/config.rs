//! Service configuration types for the Prompt Booster API.
//!
//! `ServiceConfig` represents the top-level `prompt-booster.toml` that controls
//! the listen address and the cross-origin policy.

use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Origin allowed when nothing else is configured (the Vite dev server).
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Top-level configuration for the service.
///
/// All fields have defaults, so an empty file is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ServerConfig,

    /// Cross-origin policy.
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Socket address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    ///
    /// IPv6 literals are bracketed (`[::1]:8000`).
    pub fn bind_addr(&self) -> String {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }
}

/// Cross-origin resource sharing policy.
///
/// Methods and headers are always wildcard; only the origin allow-list and
/// the credentials flag are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Exact origins allowed to read responses, e.g. `https://app.example.com`.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Whether `Access-Control-Allow-Credentials: true` is sent.
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,
}

fn default_allowed_origins() -> Vec<String> {
    vec![DEFAULT_ALLOWED_ORIGIN.to_string()]
}

fn default_allow_credentials() -> bool {
    true
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
        }
    }
}

impl CorsConfig {
    /// Check every configured origin.
    ///
    /// An origin is `scheme://host[:port]` with an `http` or `https` scheme,
    /// no path and no trailing slash. Browsers send it in exactly that form,
    /// and matching is byte-exact, so anything else would never match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for origin in &self.allowed_origins {
            validate_origin(origin)?;
        }
        Ok(())
    }

    /// Whether `origin` is on the allow-list (exact match).
    pub fn allows(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

fn validate_origin(origin: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidOrigin {
        origin: origin.to_string(),
        reason: reason.to_string(),
    };

    if origin.is_empty() {
        return Err(invalid("origin is empty"));
    }
    if origin == "*" {
        return Err(invalid("wildcard origin cannot be combined with an allow-list"));
    }
    if !origin.bytes().all(|b| b.is_ascii_graphic()) {
        return Err(invalid("origin contains whitespace or non-ASCII characters"));
    }

    let rest = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"))
        .ok_or_else(|| invalid("origin must start with http:// or https://"))?;

    if rest.is_empty() {
        return Err(invalid("origin has no host"));
    }
    if rest.contains('/') {
        return Err(invalid("origin must not contain a path or trailing slash"));
    }

    Ok(())
}
