//! HTTP server module.
//!
//! Binds the router to the configured address and serves plain HTTP until
//! SIGTERM/SIGINT, then drains open connections for a bounded grace period.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::{setup_shutdown_handler, shutdown_on};
