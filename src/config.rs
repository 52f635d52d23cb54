//! Configuration loading and constants.
//!
//! The whole configuration is read from environment variables once, at process
//! start, into an [`AppConfig`] that is then handed to the router. Handlers never
//! look at the environment themselves.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// =============================================================================
// Environment Variables
// =============================================================================

/// Listening port override
pub const ENV_PORT: &str = "PORT";

/// Bind address override
pub const ENV_HOST: &str = "HOST";

/// Service name used in the greeting message
pub const ENV_SERVICE_NAME: &str = "SERVICE_NAME";

/// Log output format ("text" or "json")
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Toggle for the per-request logging middleware
pub const ENV_LOG_REQUESTS: &str = "LOG_REQUESTS";

// =============================================================================
// Defaults
// =============================================================================

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Bind on all IPv4 interfaces so orchestrator probes can reach the process
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

pub const DEFAULT_SERVICE_NAME: &str = "hello-service";

/// Version reported by the greeting. Fixed literal, not the crate version.
pub const SERVICE_VERSION: &str = "v1.0.0";

/// Host name reported when the OS lookup fails
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_service=info";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Probe answers and timestamped greetings must never come from a cache
pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Probe Bodies
// =============================================================================

/// Body of the liveness probe
pub const HEALTHZ_BODY: &str = "OK";

/// Body of the readiness probe
pub const READY_BODY: &str = "Ready";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// What the greeting reports about this service
    pub service: ServiceConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HttpServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
}

impl ServiceConfig {
    /// Greeting message returned on `/`
    pub fn greeting(&self) -> String {
        format!("Hello from {}!", self.name)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Emit one line per incoming request
    pub requests: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            requests: true,
        }
    }
}

impl AppConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = AppConfig::default();

        if let Some(port) = get(ENV_PORT) {
            config.http.port = parse_port(&port)?;
        }

        if let Some(host) = get(ENV_HOST) {
            config.http.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost { value: host })?;
        }

        if let Some(name) = get(ENV_SERVICE_NAME) {
            config.service.name = name.trim().to_string();
        }

        if let Some(format) = get(ENV_LOG_FORMAT) {
            config.logging.format = format.parse()?;
        }

        if let Some(requests) = get(ENV_LOG_REQUESTS) {
            config.logging.requests = parse_bool(ENV_LOG_REQUESTS, &requests)?;
        }

        Ok(config)
    }
}

/// Port must be a positive integer that fits in a TCP port.
fn parse_port(value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            value: value.to_string(),
        }),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}: expected an integer between 1 and 65535")]
    InvalidPort { value: String },
    #[error("invalid HOST value {value:?}: expected an IP address")]
    InvalidHost { value: String },
    #[error("invalid LOG_FORMAT value {value:?}: expected \"text\" or \"json\"")]
    InvalidFormat { value: String },
    #[error("invalid {name} value {value:?}: expected true or false")]
    InvalidBool { name: &'static str, value: String },
}
