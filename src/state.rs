//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, UNKNOWN_HOSTNAME};

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the configuration built at startup and the host name, which is looked
/// up once because it does not change for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub hostname: Arc<str>,
}

impl AppState {
    /// Creates the state from the given configuration, resolving the host name from the OS.
    pub fn new(config: AppConfig) -> Self {
        Self::with_hostname(config, resolve_hostname())
    }

    /// Creates the state with an explicit host name.
    pub fn with_hostname(config: AppConfig, hostname: impl Into<Arc<str>>) -> Self {
        Self {
            config: Arc::new(config),
            hostname: hostname.into(),
        }
    }
}

/// Look up the OS host name, falling back to `"unknown"`.
pub fn resolve_hostname() -> String {
    match hostname::get() {
        Ok(name) => match name.into_string() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => UNKNOWN_HOSTNAME.to_string(),
            Err(raw) => {
                tracing::warn!(hostname = ?raw, "Host name is not valid UTF-8");
                UNKNOWN_HOSTNAME.to_string()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to resolve host name");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}
