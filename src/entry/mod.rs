//! Structured log entries.
//!
//! # Data Flow
//! ```text
//! LogContext (fields, error)
//!     → Logger (level filter)
//!     → Entry { level, message, fields, timestamp }
//!     → Handler (render, collect, ...)
//! ```
//!
//! # Design Decisions
//! - Field order is part of the entry; handlers render in insertion order
//! - The `component` field names the producing subsystem, `global` if absent
//! - Entries are built per call and never retained by the logger

pub mod fields;
pub mod level;
pub mod value;

use std::time::SystemTime;

pub use fields::{Fields, COMPONENT_FIELD};
pub use level::{Level, ParseLevelError};
pub use value::{SharedError, Value};

/// Component reported for entries without a `component` field.
pub const DEFAULT_COMPONENT: &str = "global";

/// A single structured log event.
#[derive(Debug, Clone)]
pub struct Entry {
    pub level: Level,
    pub message: String,
    pub fields: Fields,
    pub timestamp: SystemTime,
}

impl Entry {
    pub fn new(level: Level, message: impl Into<String>, fields: Fields) -> Self {
        Self {
            level,
            message: message.into(),
            fields,
            timestamp: SystemTime::now(),
        }
    }

    /// The component this entry belongs to.
    pub fn component(&self) -> String {
        self.fields
            .get(COMPONENT_FIELD)
            .map(ToString::to_string)
            .unwrap_or_else(|| DEFAULT_COMPONENT.to_string())
    }
}
