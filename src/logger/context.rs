//! Field accumulation before an entry is emitted.

use std::error::Error as StdError;
use std::sync::Arc;

use crate::entry::{Fields, Level, SharedError, Value};
use crate::logger::Logger;

/// Field that carries an attached error.
pub const ERROR_FIELD: &str = "error";

/// A logger plus the fields collected so far.
///
/// Builder methods consume and return the context, so a context can be
/// cloned and extended for a follow-up entry (e.g. `request` then `response`).
#[derive(Clone, Debug)]
pub struct LogContext {
    logger: Logger,
    fields: Fields,
}

impl LogContext {
    pub(crate) fn new(logger: Logger) -> Self {
        Self {
            logger,
            fields: Fields::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.set(name, value);
        self
    }

    pub fn with_fields<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in fields {
            self.fields.set(name, value);
        }
        self
    }

    /// Attach an error; it is rendered through the `error` field.
    pub fn with_error<E>(self, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.with_shared_error(Arc::new(err))
    }

    pub fn with_shared_error(self, err: SharedError) -> Self {
        self.with_field(ERROR_FIELD, Value::Error(err))
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Log at fatal severity. The process is not terminated.
    pub fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }

    pub fn log(&self, level: Level, message: &str) {
        self.logger.log(level, message, self.fields.clone());
    }
}
