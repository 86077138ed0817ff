//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};
use crate::error::AppError;

/// Pick the log filter with priority: CLI > RUST_LOG > default.
pub fn resolve_filter(cli: Option<String>, env: Option<String>) -> String {
    cli.or(env)
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Install the global subscriber in text or JSON form.
pub fn init(filter: &str, config: &LoggingConfig) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| AppError::Logging(e.to_string()))
}
