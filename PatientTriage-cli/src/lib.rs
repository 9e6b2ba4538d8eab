// PatientTriage CLI
// Argument parsing, tracing setup and report rendering for the binary

pub mod args;
pub mod logging;
pub mod report;

pub use args::{Args, OutputFormat};
pub use report::{exit_status, run};
