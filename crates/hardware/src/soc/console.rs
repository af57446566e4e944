//! Console implementations.
//!
//! Provides the two output channels used in practice:
//! 1. **`StdoutConsole`:** Writes one unsigned decimal per line to the process's stdout.
//! 2. **`CaptureConsole`:** Records values in a shared buffer for tests and embedders.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use super::traits::Console;

/// Console that prints each value on its own line to stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&mut self, value: u8) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{value}") {
            tracing::warn!(error = %e, value, "failed to write PRN output");
        }
    }
}

/// Console that records values in memory.
///
/// Clones share the same buffer: hand one clone to the CPU and keep the other
/// to inspect what the program printed.
#[derive(Clone, Debug, Default)]
pub struct CaptureConsole {
    values: Arc<Mutex<Vec<u8>>>,
}

impl CaptureConsole {
    /// Creates an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every value emitted so far, in order.
    pub fn values(&self) -> Vec<u8> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the captured output as the text the CLI would have printed.
    pub fn text(&self) -> String {
        self.values().iter().map(|v| format!("{v}\n")).collect()
    }
}

impl Console for CaptureConsole {
    fn emit(&mut self, value: u8) {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }
}
