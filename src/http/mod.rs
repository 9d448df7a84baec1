//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, connect info)
//!     → middleware/request_log.rs (`request` entry)
//!     → handler
//!     → middleware/request_log.rs (`response` entry: status, size, duration)
//!     → Send to client
//! ```

pub mod middleware;
pub mod server;

pub use middleware::{HttpLog, HttpLogLayer};
pub use server::HttpServer;
