use thiserror::Error;

/// Errors raised while loading or validating the service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("invalid CORS origin '{origin}': {reason}")]
    InvalidOrigin { origin: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origin_message_names_origin_and_reason() {
        let err = ConfigError::InvalidOrigin {
            origin: "*".to_string(),
            reason: "wildcard".to_string(),
        };
        assert_eq!(err.to_string(), "invalid CORS origin '*': wildcard");
    }

    #[test]
    fn read_error_keeps_io_source() {
        let err = ConfigError::Read {
            path: "missing.toml".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("missing.toml"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
