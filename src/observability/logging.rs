//! Structured logging setup.
//!
//! # Responsibilities
//! - Install the global `tracing` subscriber
//! - Route `tracing` events through the crate's `Logger`
//!
//! # Design Decisions
//! - `RUST_LOG` wins when set: the bridged logger is opened up to the most
//!   verbose level the filter allows, so `EnvFilter` alone decides what passes
//! - Without `RUST_LOG` the logger's level seeds the filter
//! - Entries logged directly on the `Logger` (HTTP, driver) keep its level
//! - Events are rendered by whatever handler backs the logger

use tracing::Subscriber;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::entry::Level;
use crate::logger::Logger;
use crate::observability::bridge::EntryLayer;

/// Install a global subscriber that forwards every event to `logger`.
///
/// Fails if a global subscriber is already set.
pub fn init_logging(logger: Logger) -> Result<(), TryInitError> {
    subscriber(logger, EnvFilter::try_from_default_env().ok()).try_init()
}

/// Subscriber filtering events with `filter` (or the logger's level when
/// absent) and forwarding the rest to `logger`.
pub fn subscriber(
    logger: Logger,
    filter: Option<EnvFilter>,
) -> impl Subscriber + Send + Sync + 'static {
    let (filter, logger) = match filter {
        Some(filter) => {
            let level = <EnvFilter as Layer<Registry>>::max_level_hint(&filter)
                .map_or(Level::Debug, Level::from);
            (filter, logger.with_level(level))
        }
        None => {
            let default_level = logger.level().as_level_filter();
            (EnvFilter::default().add_directive(default_level.into()), logger)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(EntryLayer::new(logger))
}
