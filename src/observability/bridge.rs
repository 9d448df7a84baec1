//! Forward `tracing` events into a [`Logger`].

use std::error::Error as StdError;
use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::Layer;

use crate::entry::{Fields, Level};
use crate::logger::Logger;

/// `tracing` layer turning each event into an entry.
///
/// The `message` field becomes the entry message; all other event fields
/// become entry fields in recording order. Span fields are not collected.
#[derive(Debug, Clone)]
pub struct EntryLayer {
    logger: Logger,
}

impl EntryLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for EntryLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Level::from(event.metadata().level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EntryVisitor::default();
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        self.logger.log(level, &message, visitor.fields);
    }
}

#[derive(Default)]
struct EntryVisitor {
    message: Option<String>,
    fields: Fields,
}

impl Visit for EntryVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.fields.set(field.name(), value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.set(field.name(), value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields.set(field.name(), value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields.set(field.name(), value);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.set(field.name(), value);
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn StdError + 'static)) {
        self.fields.set(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.set(field.name(), format!("{:?}", value));
        }
    }
}
