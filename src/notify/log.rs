//! Status log collaborator
//!
//! The orchestrator reports every notification attempt as a free-form line.
//! Callers pass `Option<&dyn StatusLog>`; `None` discards the lines.

use std::io::Write;
use std::sync::Mutex;
use tracing::info;

pub trait StatusLog: Send + Sync {
    fn line(&self, message: &str);
}

/// Forwards status lines to `tracing` at info level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl StatusLog for TracingLog {
    fn line(&self, message: &str) {
        info!(target: "hookrelay::status", "{}", message);
    }
}

/// Any locked writer is a status log, one line per message
impl<W: Write + Send> StatusLog for Mutex<W> {
    fn line(&self, message: &str) {
        // A poisoned lock still holds a usable writer.
        let mut writer = self.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "{message}");
    }
}

/// Write a line if a log is present
pub fn log_line(log: Option<&dyn StatusLog>, message: &str) {
    if let Some(log) = log {
        log.line(message);
    }
}
