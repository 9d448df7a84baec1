//! Demo server for the logging adapters.
//!
//! ```text
//! logutils-demo [--config logutils.toml] [-v...] [--bind 127.0.0.1:8080]
//!
//!   GET /        → INFO request/response
//!   GET /health  → served, not logged (with the sample config)
//!   GET /query   → DEBUG db.driver entry
//!   GET /fail    → ERROR db.driver entry, ERROR response
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use logutils::config::{load_config, LogConfig};
use logutils::http::HttpServer;
use logutils::observability::init_logging;
use logutils::{ComponentTextHandler, Logger};

#[derive(Parser)]
#[command(name = "logutils-demo")]
#[command(about = "Serve a demo app with component-aware request logging", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(short, long, default_value = "127.0.0.1:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogConfig::default(),
    };
    config.verbosity = config.verbosity.increased(cli.verbose);

    let logger = Logger::new(ComponentTextHandler::stderr(), config.level());
    init_logging(logger.clone())?;

    tracing::info!(
        component = "main",
        verbosity = config.verbosity.0,
        level = %config.level(),
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&cli.bind).await?;
    HttpServer::new(config, logger).run(listener).await?;

    tracing::info!(component = "main", "Shutdown complete");
    Ok(())
}
