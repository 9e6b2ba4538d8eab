// Repository module structure
pub mod errors;
mod diagnostic_log;

// Re-export commonly used types
pub use errors::LogError;
pub use diagnostic_log::{DiagnosticLog, DiagnosticLogTrait};
