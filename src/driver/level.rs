//! Database driver log levels.

use std::fmt;

use crate::entry::Level;

/// Severity as reported by the database driver.
///
/// Kept separate from [`Level`]: the driver has levels the logger lacks
/// (trace, none) and may hand over codes it never documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriverLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    None,
    Invalid(i32),
}

impl DriverLevel {
    /// Decode the driver's numeric level.
    pub fn from_code(code: i32) -> Self {
        match code {
            6 => DriverLevel::Trace,
            5 => DriverLevel::Debug,
            4 => DriverLevel::Info,
            3 => DriverLevel::Warn,
            2 => DriverLevel::Error,
            1 => DriverLevel::None,
            other => DriverLevel::Invalid(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            DriverLevel::Trace => 6,
            DriverLevel::Debug => 5,
            DriverLevel::Info => 4,
            DriverLevel::Warn => 3,
            DriverLevel::Error => 2,
            DriverLevel::None => 1,
            DriverLevel::Invalid(code) => *code,
        }
    }

    /// Whether entries at this level have a direct logger counterpart.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, DriverLevel::None | DriverLevel::Invalid(_))
    }

    /// Logger level an entry at this driver level is emitted at.
    ///
    /// The driver logs every executed query at info, so trace, debug and info
    /// all land on debug. Unrecognized levels are raised to error so they are
    /// never lost.
    pub fn entry_level(&self) -> Level {
        match self {
            DriverLevel::Trace | DriverLevel::Debug | DriverLevel::Info => Level::Debug,
            DriverLevel::Warn => Level::Warn,
            DriverLevel::Error | DriverLevel::None | DriverLevel::Invalid(_) => Level::Error,
        }
    }
}

impl fmt::Display for DriverLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverLevel::Trace => f.write_str("trace"),
            DriverLevel::Debug => f.write_str("debug"),
            DriverLevel::Info => f.write_str("info"),
            DriverLevel::Warn => f.write_str("warn"),
            DriverLevel::Error => f.write_str("error"),
            DriverLevel::None => f.write_str("none"),
            DriverLevel::Invalid(code) => write!(f, "invalid level {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        for code in 1..=6 {
            assert_eq!(DriverLevel::from_code(code).code(), code);
        }
        assert_eq!(DriverLevel::from_code(42), DriverLevel::Invalid(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(DriverLevel::Info.to_string(), "info");
        assert_eq!(DriverLevel::Invalid(9).to_string(), "invalid level 9");
    }

    #[test]
    fn test_entry_level_translation() {
        assert_eq!(DriverLevel::Trace.entry_level(), Level::Debug);
        assert_eq!(DriverLevel::Debug.entry_level(), Level::Debug);
        assert_eq!(DriverLevel::Info.entry_level(), Level::Debug);
        assert_eq!(DriverLevel::Warn.entry_level(), Level::Warn);
        assert_eq!(DriverLevel::Error.entry_level(), Level::Error);
        assert_eq!(DriverLevel::Invalid(0).entry_level(), Level::Error);
        assert!(!DriverLevel::None.is_recognized());
    }
}
