use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note appended to the diagnostic log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Position of the entry in the log, starting at 1
    pub sequence: u64,

    /// Human-readable message
    pub message: String,

    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new(sequence: u64, message: impl Into<String>) -> Self {
        Self {
            sequence,
            message: message.into(),
            recorded_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} [{}] {}",
            self.sequence,
            self.recorded_at.to_rfc3339(),
            self.message
        )
    }
}
