//! Component-aware terminal rendering.
//!
//! # Line Format
//! ```text
//! ESC[<c>m  INFOESC[0m[0012] ESC[1;30mhttp      ESC[0m request                   ESC[<c>murlESC[0m=/
//! └ level, right-aligned 6 ┘└ secs ┘└ component, left 10 ┘ └ message, min 25 ┘ └ fields ... ┘
//! ```
//!
//! # Design Decisions
//! - Elapsed seconds are measured from the handler's own start instant
//! - Elapsed time is read under the sink lock, so tags never go backwards
//!   in output order
//! - Write failures are swallowed: logging never fails the host program

pub mod color;

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use crate::entry::{Entry, COMPONENT_FIELD};
use crate::logger::{Handler, HandlerError};

use self::color::{level_color, level_label, BOLD, RESET};

/// Writes one colorized line per entry, with the `component` field pulled
/// out into its own column.
#[derive(Debug)]
pub struct ComponentTextHandler<W> {
    start: Instant,
    out: Mutex<W>,
}

impl ComponentTextHandler<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ComponentTextHandler<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ComponentTextHandler<W> {
    /// Create a handler; elapsed time counts from now.
    pub fn new(out: W) -> Self {
        Self::with_start(out, Instant::now())
    }

    pub fn with_start(out: W, start: Instant) -> Self {
        Self {
            start,
            out: Mutex::new(out),
        }
    }

    /// Whole seconds since this handler was started.
    pub fn elapsed_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }

    /// Write `entry` as a single line and flush.
    pub fn render(&self, entry: &Entry) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let line = self.format_line(entry, self.elapsed_secs());
        out.write_all(line.as_bytes())?;
        out.flush()
    }

    fn format_line(&self, entry: &Entry, secs: u64) -> String {
        let color = level_color(entry.level).code();
        let label = level_label(entry.level);

        let mut line = format!(
            "\x1b[{}m{:>6}{}[{:04}] \x1b[{}m{:<10}{} {:<25}",
            color,
            label,
            RESET,
            secs,
            BOLD,
            entry.component(),
            RESET,
            entry.message
        );

        for (name, value) in entry.fields.iter() {
            if name == COMPONENT_FIELD {
                continue;
            }
            line.push_str(&format!(" \x1b[{}m{}{}={}", color, name, RESET, value));
        }

        line.push('\n');
        line
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> Handler for ComponentTextHandler<W> {
    fn handle_log(&self, entry: &Entry) -> Result<(), HandlerError> {
        let _ = self.render(entry);
        Ok(())
    }
}
