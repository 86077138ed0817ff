//! Release notice: serves the current release announcement over HTTP,
//! alongside a liveness probe for orchestrators.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
