// Testing utilities for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

use std::sync::{Arc, Mutex};

use crate::services::output::OutputSink;

/// Output sink that records every emitted line instead of printing it.
///
/// Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CapturedOutput {
    /// Create a new, empty capture
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OutputSink for CapturedOutput {
    fn emit(&self, line: &str) -> std::io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
        Ok(())
    }
}
