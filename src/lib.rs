//! hello-service: a greeting endpoint plus liveness and readiness probes.
//!
//! The binary in `main.rs` reads the configuration, initialises tracing and
//! hands a router built by [`routes::create_router`] to [`http::start_server`].

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::AppConfig;
pub use error::StartupError;
pub use routes::create_router;
pub use state::AppState;
