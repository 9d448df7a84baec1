//! ANSI color codes and per-level lookup.

use crate::entry::Level;

/// SGR color codes used in rendered lines.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Gray = 37,
}

impl Color {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Bold dark style for the component column.
pub const BOLD: &str = "1;30";

/// Reset sequence.
pub const RESET: &str = "\x1b[0m";

pub fn level_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::Gray,
        Level::Info => Color::Blue,
        Level::Warn => Color::Yellow,
        Level::Error | Level::Fatal => Color::Red,
    }
}

pub fn level_label(level: Level) -> &'static str {
    match level {
        Level::Debug => "DEBUG",
        Level::Info => "INFO",
        Level::Warn => "WARN",
        Level::Error => "ERROR",
        Level::Fatal => "FATAL",
    }
}
