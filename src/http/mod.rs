//! HTTP server module.
//!
//! Plain HTTP/1.1 only. The listener is bound first so that an occupied or
//! forbidden port is reported before anything is served.

mod server;

pub use server::{bind, serve, start_server, ServerError};
