//! HTTP middleware.

pub mod request_log;

pub use request_log::{response_level, HttpLog, HttpLogLayer};
