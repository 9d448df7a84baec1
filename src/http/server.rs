//! Demo HTTP server.
//!
//! # Responsibilities
//! - Create the Axum router with a handful of demo handlers
//! - Wire up middleware (request logging, timeout)
//! - Forward simulated database driver logs through the driver adapter
//! - Serve until Ctrl+C

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;

use crate::config::LogConfig;
use crate::driver::{DriverData, DriverLevel, DriverLogAdapter, DriverLogger};
use crate::entry::Value;
use crate::http::middleware::HttpLogLayer;
use crate::logger::Logger;

/// Request timeout applied to every handler.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<LogConfig>,
    pub driver: Arc<DriverLogAdapter>,
}

/// HTTP server demonstrating the logging adapters.
pub struct HttpServer {
    router: Router,
    config: LogConfig,
}

impl HttpServer {
    pub fn new(config: LogConfig, logger: Logger) -> Self {
        let state = AppState {
            config: Arc::new(config.clone()),
            driver: Arc::new(DriverLogAdapter::from_config(logger.clone(), &config.driver)),
        };

        let router = Self::build_router(&config, logger, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &LogConfig, logger: Logger, state: AppState) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .route("/health", get(health_handler))
            .route("/status", get(status_handler))
            .route("/query", get(query_handler))
            .route("/fail", get(fail_handler))
            .with_state(state)
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                REQUEST_TIMEOUT,
            ))
            .layer(HttpLogLayer::from_config(logger, &config.http))
    }

    /// The router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(component = "server", address = %addr, "HTTP server starting");

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!(component = "server", "HTTP server stopped");
        Ok(())
    }
}

async fn index_handler() -> &'static str {
    "hello"
}

async fn health_handler() -> &'static str {
    "ok"
}

async fn status_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "verbosity": state.config.verbosity,
        "level": state.config.level().to_string(),
        "exclude_path_prefixes": state.config.http.exclude_path_prefixes,
    }))
}

/// Pretend to run a query; the driver reports it at info.
async fn query_handler(State(state): State<AppState>) -> &'static str {
    let mut data = DriverData::new();
    data.insert("sql".into(), Value::from("SELECT 1"));
    data.insert("rowCount".into(), Value::from(1u64));
    state.driver.log(DriverLevel::Info, "Query", &data);
    "1"
}

/// Pretend a query failed; the driver reports it with an error object.
async fn fail_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut data = DriverData::new();
    data.insert("sql".into(), Value::from("SELECT * FROM missing"));
    data.insert(
        "err".into(),
        Value::error(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer")),
    );
    state.driver.log(DriverLevel::Error, "Query", &data);
    (StatusCode::INTERNAL_SERVER_ERROR, "query failed")
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(component = "server", error = %err, "Failed to listen for Ctrl+C");
        return;
    }
    tracing::info!(component = "server", "Shutdown signal received");
}
