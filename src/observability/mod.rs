//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! tracing::info!(component = "...", ...)
//!     → bridge.rs (EntryLayer: event → Entry)
//!     → Logger (level follows the EnvFilter)
//!     → ComponentTextHandler (one line per entry)
//! ```
//!
//! # Design Decisions
//! - The crate's own diagnostics use `tracing`; host code may do the same
//! - One rendering path for bridged events, HTTP entries and driver entries

pub mod bridge;
pub mod logging;

pub use bridge::EntryLayer;
pub use logging::{init_logging, subscriber};
