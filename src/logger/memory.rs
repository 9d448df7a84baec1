//! In-memory handler for tests and inspection.

use std::sync::{Mutex, PoisonError};

use crate::entry::Entry;
use crate::logger::{Handler, HandlerError};

/// Collects every entry it receives.
#[derive(Debug, Default)]
pub struct MemoryHandler {
    entries: Mutex<Vec<Entry>>,
}

impl MemoryHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collected entries, oldest first.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Handler for MemoryHandler {
    fn handle_log(&self, entry: &Entry) -> Result<(), HandlerError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}
