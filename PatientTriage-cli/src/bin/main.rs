use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing::debug;

use patient_triage_cli::{exit_status, logging, run, Args};
use patient_triage_domain::services::create_default_classification_service;

/// Entry point for the patient-triage command
///
/// Loads `.env`, installs tracing, assesses the patient given on the command
/// line and exits with 0 when completed or 2 when the age was rejected.
fn main() -> anyhow::Result<ExitCode> {
    // A missing .env file is fine; TRIAGE_* may come from the environment
    let env_loaded = dotenv().is_ok();

    logging::init_tracing();
    debug!(env_loaded, "Starting patient-triage");

    let args = Args::parse();
    let service = create_default_classification_service();

    let stdout = std::io::stdout();
    let assessment = run(&args, &service, &mut stdout.lock())?;

    Ok(ExitCode::from(exit_status(&assessment)))
}
