//! Log entry source.
//!
//! # Responsibilities
//! - Hold the minimum level and the handler entries are dispatched to
//! - Build entries from accumulated fields (`LogContext`)
//! - Report handler failures without returning them to the caller
//!
//! # Design Decisions
//! - `Logger` is cheap to clone (shared handler) and immutable
//! - Level filtering happens here, before any formatting work
//! - Fatal entries are logged like any other; terminating is the caller's call

pub mod context;
pub mod handler;
pub mod memory;

use std::fmt;
use std::sync::Arc;

use crate::entry::{Entry, Fields, Level, Value};

pub use context::{LogContext, ERROR_FIELD};
pub use handler::{Handler, HandlerError};
pub use memory::MemoryHandler;

/// Dispatches entries at or above `level` to a handler.
#[derive(Clone)]
pub struct Logger {
    handler: Arc<dyn Handler>,
    level: Level,
}

impl Logger {
    pub fn new<H: Handler + 'static>(handler: H, level: Level) -> Self {
        Self {
            handler: Arc::new(handler),
            level,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Same handler, different minimum level.
    pub fn with_level(&self, level: Level) -> Self {
        Self {
            handler: self.handler.clone(),
            level,
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// An empty context bound to this logger.
    pub fn context(&self) -> LogContext {
        LogContext::new(self.clone())
    }

    pub fn with_field(&self, name: impl Into<String>, value: impl Into<Value>) -> LogContext {
        self.context().with_field(name, value)
    }

    pub fn with_fields<K, V>(&self, fields: impl IntoIterator<Item = (K, V)>) -> LogContext
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.context().with_fields(fields)
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message, Fields::new());
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message, Fields::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message, Fields::new());
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message, Fields::new());
    }

    pub fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message, Fields::new());
    }

    /// Emit one entry if `level` passes the filter.
    pub fn log(&self, level: Level, message: &str, fields: Fields) {
        if !self.enabled(level) {
            return;
        }

        let entry = Entry::new(level, message, fields);
        if let Err(err) = self.handler.handle_log(&entry) {
            // the handler is the only sink we have
            eprintln!("error logging: {}", err);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("level", &self.level).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("disk full")]
    struct DiskFull;

    fn memory_logger(level: Level) -> (Arc<MemoryHandler>, Logger) {
        let handler = Arc::new(MemoryHandler::new());
        let logger = Logger::new(handler.clone(), level);
        (handler, logger)
    }

    #[test]
    fn test_entries_below_level_are_dropped() {
        let (handler, logger) = memory_logger(Level::Warn);

        logger.debug("noise");
        logger.info("noise");
        logger.warn("kept");
        logger.error("kept");

        let entries = handler.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::Warn);
        assert_eq!(entries[1].level, Level::Error);
    }

    #[test]
    fn test_context_fields_are_ordered() {
        let (handler, logger) = memory_logger(Level::Debug);

        logger
            .with_field("url", "/")
            .with_field("method", "GET")
            .with_field("component", "http")
            .info("request");

        let entry = &handler.entries()[0];
        assert_eq!(entry.message, "request");
        assert_eq!(
            entry.fields.names().collect::<Vec<_>>(),
            vec!["url", "method", "component"]
        );
    }

    #[test]
    fn test_with_error_sets_error_field() {
        let (handler, logger) = memory_logger(Level::Debug);

        logger.context().with_error(DiskFull).error("write failed");

        let entry = &handler.entries()[0];
        assert_eq!(entry.fields.get(ERROR_FIELD).unwrap().to_string(), "disk full");
    }

    #[test]
    fn test_context_clone_extends_independently() {
        let (handler, logger) = memory_logger(Level::Debug);

        let ctx = logger.with_field("url", "/a");
        ctx.info("request");
        ctx.clone().with_field("status", 200u16).info("response");

        let entries = handler.entries();
        assert_eq!(entries[0].fields.len(), 1);
        assert_eq!(entries[1].fields.len(), 2);
    }

    #[test]
    fn test_with_level_shares_handler() {
        let (handler, logger) = memory_logger(Level::Error);

        logger.with_level(Level::Debug).debug("kept");
        logger.debug("dropped");

        assert_eq!(handler.len(), 1);
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_fatal_is_logged() {
        let (handler, logger) = memory_logger(Level::Fatal);
        logger.error("dropped");
        logger.fatal("kept");
        assert_eq!(handler.len(), 1);
        assert_eq!(handler.entries()[0].level, Level::Fatal);
    }
}
