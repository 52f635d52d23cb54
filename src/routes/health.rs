//! Probe endpoints for container orchestration.
//!
//! Both probes answer 200 with fixed text for as long as the process can
//! serve HTTP. Nothing else is checked: there are no dependencies whose
//! availability could make the service unready.

use crate::config::{HEALTHZ_BODY, READY_BODY};

/// Liveness probe handler (`/healthz`).
pub async fn healthz() -> &'static str {
    HEALTHZ_BODY
}

/// Readiness probe handler (`/ready`).
pub async fn ready() -> &'static str {
    READY_BODY
}
