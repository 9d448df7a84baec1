//! Entry sinks.

use std::sync::Arc;

use crate::entry::Entry;

/// Error surfaced by a handler that chooses not to swallow its failures.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Receives every entry that passes the logger's level filter.
pub trait Handler: Send + Sync {
    fn handle_log(&self, entry: &Entry) -> Result<(), HandlerError>;
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle_log(&self, entry: &Entry) -> Result<(), HandlerError> {
        (**self).handle_log(entry)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle_log(&self, entry: &Entry) -> Result<(), HandlerError> {
        (**self).handle_log(entry)
    }
}
