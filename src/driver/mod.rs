//! Database driver log adapter.
//!
//! # Data Flow
//! ```text
//! driver log hook (level, message, data)
//!     → adapter.rs (ignore matcher, field translation)
//!     → level.rs (driver level → entry level)
//!     → Logger (one entry, component=db.driver)
//! ```
//!
//! # Design Decisions
//! - Driver levels and logger levels stay separate enums
//! - Unmapped driver levels are logged at error, never dropped
//! - The ignore matcher is fixed at construction

pub mod adapter;
pub mod level;

pub use adapter::{
    DriverData, DriverLogAdapter, DriverLogger, ErrorMatcher, DRIVER_COMPONENT, DRIVER_ERROR_KEY,
    INVALID_LEVEL_FIELD,
};
pub use level::DriverLevel;
