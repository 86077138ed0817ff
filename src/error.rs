//! Top-level startup error.
//!
//! Request handling cannot fail; everything that can go wrong happens before
//! or while binding the listener.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
