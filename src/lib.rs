//! Logging adapters around a small structured logging core.
//!
//! - `render`: component-aware, colorized terminal output
//! - `http`: request/response logging middleware
//! - `verbosity`: verbosity knob to level mapping
//! - `driver`: database driver log forwarding
//! - `observability`: `tracing` bridge and subscriber setup

pub mod config;
pub mod driver;
pub mod entry;
pub mod http;
pub mod logger;
pub mod observability;
pub mod render;
pub mod verbosity;

pub use config::LogConfig;
pub use entry::{Entry, Fields, Level, Value};
pub use logger::{Handler, LogContext, Logger, MemoryHandler};
pub use render::ComponentTextHandler;
pub use verbosity::Verbosity;
