//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files and
//! default every field, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::entry::Level;
use crate::verbosity::{self, Verbosity};

/// Root logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// 0 = fatal only ... 4 = debug. Larger values saturate.
    pub verbosity: Verbosity,

    /// HTTP request/response logging.
    pub http: HttpLogConfig,

    /// Database driver log forwarding.
    pub driver: DriverLogConfig,
}

impl LogConfig {
    /// Minimum entry level derived from `verbosity`.
    pub fn level(&self) -> Level {
        verbosity::to_level(self.verbosity)
    }
}

/// HTTP middleware configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct HttpLogConfig {
    /// Requests whose path starts with one of these are not logged.
    pub exclude_path_prefixes: Vec<String>,
}

/// Driver adapter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DriverLogConfig {
    /// Driver errors with exactly this message are not logged.
    pub ignore_error_messages: Vec<String>,
}
