//! hello-service entry point.
//!
//! Reads the configuration from the environment, initializes tracing, builds
//! the router and serves it until the process is terminated. Any startup
//! failure is reported on stderr and the process exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_service::config::{ConfigError, LogFormat, DEFAULT_LOG_FILTER};
use hello_service::http::start_server;
use hello_service::{create_router, AppConfig, AppState, StartupError};

/// A greeting service with liveness and readiness probes.
///
/// Takes no options: configure it with PORT, HOST, SERVICE_NAME, LOG_FORMAT,
/// LOG_REQUESTS and RUST_LOG.
#[derive(Parser, Debug)]
#[command(name = "hello-service", version, about)]
struct Args {}

#[tokio::main]
async fn main() -> ExitCode {
    let _args = Args::parse();

    let config = AppConfig::from_env();

    // A broken LOG_FORMAT still needs a subscriber to report itself
    let format = config
        .as_ref()
        .map(|c| c.logging.format)
        .unwrap_or_default();
    init_tracing(format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start");
            eprintln!("hello-service: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize tracing with priority: RUST_LOG > default.
fn init_tracing(format: LogFormat) {
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn run(config: Result<AppConfig, ConfigError>) -> Result<(), StartupError> {
    let config = config?;

    let state = AppState::new(config.clone());
    tracing::info!(
        hostname = %state.hostname,
        version = %config.service.version,
        request_logging = config.logging.requests,
        "Loaded configuration"
    );

    let app = create_router(state);
    start_server(app, &config).await?;

    Ok(())
}
