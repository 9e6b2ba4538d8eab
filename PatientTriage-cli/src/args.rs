use clap::{Parser, ValueEnum};

/// How the assessment is reported after the patient lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Patient lines only
    Text,
    /// Patient lines followed by the assessment as JSON
    Json,
}

/// Validate a patient's age and classify their blood pressure risk
#[derive(Debug, Parser)]
#[command(name = "patient-triage")]
#[command(version)]
#[command(about = "Validate a patient's age and classify blood pressure risk", long_about = None)]
pub struct Args {
    /// Patient name
    pub name: String,

    /// Patient age in years
    #[arg(allow_negative_numbers = true)]
    pub age: i32,

    /// Existing condition, free text
    #[arg(short, long, default_value = "none")]
    pub condition: String,

    /// Systolic blood pressure (the higher number)
    #[arg(short, long, allow_negative_numbers = true)]
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    #[arg(short, long, allow_negative_numbers = true)]
    pub diastolic: i32,

    /// Do not print the score line
    #[arg(short, long, env = "TRIAGE_QUIET")]
    pub quiet: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "TRIAGE_OUTPUT")]
    pub format: OutputFormat,

    /// Print the diagnostic log after processing
    #[arg(long)]
    pub show_log: bool,

    /// Print the classification thresholds before processing
    #[arg(long)]
    pub show_config: bool,
}
