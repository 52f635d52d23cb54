//! Root greeting handler.
//!
//! Answers `/` with a small record describing the service and the host serving
//! the request. JSON by default; clients that ask only for `text/plain` get the
//! same fields as plain text lines.

use axum::{
    extract::State,
    http::{header::ACCEPT, HeaderMap},
    response::{IntoResponse, Response},
    Extension, Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::ServiceConfig;
use crate::middleware::RequestId;
use crate::state::AppState;

/// Body of `GET /`.
///
/// Only `hostname` and `timestamp` vary; the shape is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
    pub version: String,
    pub hostname: String,
    /// RFC 3339, UTC, millisecond precision
    pub timestamp: String,
}

impl Greeting {
    pub fn new(service: &ServiceConfig, hostname: &str, now: DateTime<Utc>) -> Self {
        Self {
            message: service.greeting(),
            version: service.version.clone(),
            hostname: hostname.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Plain-text rendering used for `Accept: text/plain`.
    pub fn to_plain_text(&self) -> String {
        format!(
            "{}\nVersion: {}\nHostname: {}\nTimestamp: {}",
            self.message, self.version, self.hostname, self.timestamp
        )
    }
}

/// Quality value of a media range; 1 when absent, 0 when unparseable.
fn quality(params: std::str::Split<'_, char>) -> f32 {
    for param in params {
        if let Some((name, value)) = param.split_once('=') {
            if name.trim().eq_ignore_ascii_case("q") {
                return value.trim().parse().unwrap_or(0.0);
            }
        }
    }
    1.0
}

/// True when the client accepts `text/plain` and nothing that JSON would satisfy.
///
/// Ranges with `q=0` are refusals and are ignored.
fn wants_plain_text(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mut plain = false;
    for range in accept.split(',') {
        let mut parts = range.split(';');
        let media_type = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
        if quality(parts) <= 0.0 {
            continue;
        }
        match media_type.as_str() {
            "text/plain" => plain = true,
            "application/json" | "application/*" | "*/*" => return false,
            _ => {}
        }
    }
    plain
}

/// Root greeting handler.
#[instrument(
    name = "home::index",
    skip(state, request_id, headers),
    fields(request_id = tracing::field::Empty)
)]
pub async fn index(
    State(state): State<AppState>,
    request_id: Option<Extension<RequestId>>,
    headers: HeaderMap,
) -> Response {
    if let Some(Extension(RequestId(id))) = &request_id {
        tracing::Span::current().record("request_id", tracing::field::display(id));
    }

    let greeting = Greeting::new(&state.config.service, &state.hostname, Utc::now());

    if wants_plain_text(&headers) {
        greeting.to_plain_text().into_response()
    } else {
        Json(greeting).into_response()
    }
}
