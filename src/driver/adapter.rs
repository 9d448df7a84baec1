//! Forwarding driver log callbacks into a [`Logger`].

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::config::DriverLogConfig;
use crate::driver::DriverLevel;
use crate::entry::{Value, COMPONENT_FIELD};
use crate::logger::{Logger, ERROR_FIELD};

/// Key under which the driver passes an error object.
pub const DRIVER_ERROR_KEY: &str = "err";

/// Component attached to every forwarded entry.
pub const DRIVER_COMPONENT: &str = "db.driver";

/// Field flagging a level the adapter could not map.
pub const INVALID_LEVEL_FIELD: &str = "invalidDriverLogLevel";

/// Key/value payload of a driver log call.
pub type DriverData = BTreeMap<String, Value>;

/// Decides whether a driver error should be dropped instead of logged.
pub type ErrorMatcher = Arc<dyn Fn(&(dyn StdError + Send + Sync + 'static)) -> bool + Send + Sync>;

/// Logging hook invoked by the database driver.
pub trait DriverLogger: Send + Sync {
    fn log(&self, level: DriverLevel, message: &str, data: &DriverData);
}

/// Translates driver log calls into entries tagged `component=db.driver`.
#[derive(Clone)]
pub struct DriverLogAdapter {
    logger: Logger,
    ignore_errors: Option<ErrorMatcher>,
}

impl DriverLogAdapter {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            ignore_errors: None,
        }
    }

    /// Build from configuration; errors whose message equals one of
    /// `ignore_error_messages` are dropped.
    pub fn from_config(logger: Logger, config: &DriverLogConfig) -> Self {
        let adapter = Self::new(logger);
        if config.ignore_error_messages.is_empty() {
            return adapter;
        }

        let messages = config.ignore_error_messages.clone();
        adapter.with_ignore_errors(move |err| {
            let message = err.to_string();
            messages.iter().any(|m| *m == message)
        })
    }

    /// Drop calls whose `err` value matches.
    pub fn with_ignore_errors<F>(mut self, matcher: F) -> Self
    where
        F: Fn(&(dyn StdError + Send + Sync + 'static)) -> bool + Send + Sync + 'static,
    {
        self.ignore_errors = Some(Arc::new(matcher));
        self
    }

    fn is_ignored(&self, err: Option<&Value>) -> bool {
        match (err.and_then(Value::as_error), &self.ignore_errors) {
            (Some(err), Some(matcher)) => matcher(err),
            _ => false,
        }
    }
}

impl DriverLogger for DriverLogAdapter {
    fn log(&self, level: DriverLevel, message: &str, data: &DriverData) {
        let err = data.get(DRIVER_ERROR_KEY);
        if self.is_ignored(err) {
            return;
        }

        let fields = data
            .iter()
            .filter(|(key, _)| key.as_str() != DRIVER_ERROR_KEY)
            .map(|(key, value)| (key.clone(), value.clone()));

        let mut ctx = self
            .logger
            .with_fields(fields)
            .with_field(COMPONENT_FIELD, DRIVER_COMPONENT)
            .with_field("level", level.to_string());

        if let Some(err) = err {
            ctx = ctx.with_field(ERROR_FIELD, err.clone());
        }

        if !level.is_recognized() {
            ctx = ctx.with_field(INVALID_LEVEL_FIELD, level.to_string());
        }

        ctx.log(level.entry_level(), message);
    }
}

impl fmt::Debug for DriverLogAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriverLogAdapter")
            .field("logger", &self.logger)
            .field("ignore_errors", &self.ignore_errors.is_some())
            .finish()
    }
}
