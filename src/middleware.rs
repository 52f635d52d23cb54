//! Request logging middleware.
//!
//! Generates a UUID v4 for each incoming request and creates a tracing span
//! that wraps the request. One event is logged when the request arrives,
//! before the handler runs, with the method, path and client address; a
//! second one is logged with the status code once the response is ready.
//! The response itself is passed through untouched.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

/// Placeholder for the client address when the connection info is unavailable
const UNKNOWN_CLIENT: &str = "-";

/// Extension type for accessing request ID in handlers if needed.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Client address recorded by the server, or `-` when the router is driven
/// without connection info (for example in tests).
fn client_addr(request: &Request) -> String {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Middleware that logs every request and creates a request span.
///
/// This should be the outermost layer so the span covers the handler and
/// every other layer.
pub async fn request_log_layer(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let client = client_addr(&request);

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(RequestId(request_id));

    async move {
        tracing::info!(method = %method, path = %path, client = %client, "Request received");

        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
