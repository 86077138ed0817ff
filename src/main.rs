//! Release notice server entry point.
//!
//! Parses the command line, loads configuration, initializes tracing, builds
//! the Axum router and serves it until a shutdown signal arrives.

use clap::Parser;

use release_notice::config::AppConfig;
use release_notice::{http, logging, routes, AppError};

/// Serves the current release announcement and a health check
#[derive(Parser, Debug)]
#[command(name = "release-notice", version, about)]
struct Args {
    /// Path to configuration file (defaults to config/default.toml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to listen on (overrides http.host)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides http.port)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level filter (e.g., "release_notice=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_overrides(args.host, args.port)?;

    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, &config.logging)?;

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = routes::create_router();
    http::start_server(app, &config).await?;

    Ok(())
}
