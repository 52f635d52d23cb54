//! HTTP route handlers.
//!
//! The route table is fixed: the root greeting and the two probe endpoints.
//! Any other path falls through to axum's default 404, and a known path hit
//! with a method other than GET or HEAD gets axum's default 405.
//!
//! Every response is marked `Cache-Control: no-store`. Request logging is
//! layered around the whole table when enabled in the configuration.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_log_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let log_requests = state.config.logging.requests;

    let router = Router::new()
        .route("/", get(home::index))
        .route("/healthz", get(health::healthz))
        .route("/ready", get(health::ready))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    if log_requests {
        // Outermost layer so the request span wraps everything else
        router.layer(middleware::from_fn(request_log_layer))
    } else {
        router
    }
}
