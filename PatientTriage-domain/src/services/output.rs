use std::io::{self, Write};

/// Destination for the human-readable lines produced while classifying
pub trait OutputSink {
    /// Emit one line of output
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Writes every line to standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput;

impl OutputSink for ConsoleOutput {
    fn emit(&self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }
}
