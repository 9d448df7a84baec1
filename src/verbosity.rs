//! Verbosity knob and its mapping to log levels.
//!
//! Higher numbers mean more verbose output. Values past `DEBUG` saturate.

use serde::{Deserialize, Serialize};

use crate::driver::DriverLevel;
use crate::entry::Level;

/// Caller-facing verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Verbosity(pub u8);

impl Verbosity {
    /// Least verbose: fatal entries only.
    pub const FATAL: Verbosity = Verbosity(0);
    pub const ERROR: Verbosity = Verbosity(1);
    pub const WARN: Verbosity = Verbosity(2);
    pub const INFO: Verbosity = Verbosity(3);
    /// Most verbose; anything higher behaves the same.
    pub const DEBUG: Verbosity = Verbosity(4);

    /// Raise verbosity by `steps`, saturating.
    pub fn increased(self, steps: u8) -> Self {
        Verbosity(self.0.saturating_add(steps))
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::INFO
    }
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        Verbosity(v)
    }
}

/// Minimum entry level for a verbosity.
pub fn to_level(v: Verbosity) -> Level {
    match v {
        v if v >= Verbosity::DEBUG => Level::Debug,
        Verbosity::INFO => Level::Info,
        Verbosity::WARN => Level::Warn,
        Verbosity::ERROR => Level::Error,
        _ => Level::Fatal,
    }
}

/// Minimum driver level for a verbosity.
///
/// The driver reports queries and connections only at trace and debug, so
/// each step is shifted one level more verbose than [`to_level`].
pub fn to_driver_level(v: Verbosity) -> DriverLevel {
    match v {
        v if v >= Verbosity::DEBUG => DriverLevel::Trace,
        Verbosity::INFO => DriverLevel::Debug,
        Verbosity::WARN => DriverLevel::Info,
        Verbosity::ERROR => DriverLevel::Error,
        _ => DriverLevel::None,
    }
}
