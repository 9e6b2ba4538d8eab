use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use tracing::debug;

use super::errors::LogError;
use crate::models::LogEntry;

/// Process-wide log shared by every caller of [`DiagnosticLog::global`]
static GLOBAL_LOG: Lazy<DiagnosticLog> = Lazy::new(DiagnosticLog::new);

/// Append-only store of diagnostic messages
pub trait DiagnosticLogTrait {
    /// Append a message after every existing entry
    fn append(&self, message: String) -> Result<(), LogError>;

    /// Snapshot of all entries in the order they were appended
    fn entries(&self) -> Result<Vec<LogEntry>, LogError>;

    /// Snapshot of the message text only, in append order
    fn messages(&self) -> Result<Vec<String>, LogError> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|entry| entry.message)
            .collect())
    }

    /// Number of entries appended so far
    fn len(&self) -> Result<usize, LogError> {
        Ok(self.entries()?.len())
    }

    /// Whether nothing has been appended yet
    fn is_empty(&self) -> Result<bool, LogError> {
        Ok(self.len()? == 0)
    }
}

/// In-memory diagnostic log.
///
/// Clones share the same underlying entries, so a caller can hand one clone
/// to a service and keep another to inspect what was recorded.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticLog {
    /// Create a new, empty log
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the log that lives for the whole process
    pub fn global() -> Self {
        GLOBAL_LOG.clone()
    }

    /// Whether two handles point at the same underlying log
    pub fn shares_storage_with(&self, other: &DiagnosticLog) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl DiagnosticLogTrait for DiagnosticLog {
    fn append(&self, message: String) -> Result<(), LogError> {
        let mut entries = self.entries.lock()?;
        let sequence = entries.len() as u64 + 1;
        debug!(sequence, message = %message, "Appending diagnostic log entry");
        entries.push(LogEntry::new(sequence, message));
        Ok(())
    }

    fn entries(&self) -> Result<Vec<LogEntry>, LogError> {
        let entries = self.entries.lock()?;
        Ok(entries.clone())
    }

    fn len(&self) -> Result<usize, LogError> {
        let entries = self.entries.lock()?;
        Ok(entries.len())
    }
}
