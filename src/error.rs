//! Process-level errors.
//!
//! Request handlers cannot fail, so the only error the service knows about is a
//! failure to start: bad configuration or a listener that cannot be bound or served.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_wrapped() {
        let err: StartupError = ConfigError::InvalidPort {
            value: "x".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Configuration error: invalid PORT"));
    }
}
