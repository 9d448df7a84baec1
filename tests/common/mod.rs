//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use logutils::{Level, Logger, MemoryHandler};

/// A logger that records into memory at the given level.
#[allow(dead_code)]
pub fn memory_logger(level: Level) -> (Arc<MemoryHandler>, Logger) {
    let handler = Arc::new(MemoryHandler::new());
    let logger = Logger::new(handler.clone(), level);
    (handler, logger)
}

/// Cloneable in-memory sink; all clones share one buffer.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct SharedBuffer {
    buffer: Arc<Mutex<Vec<u8>>>,
}

#[allow(dead_code)]
impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| io::Error::other("Mutex poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
