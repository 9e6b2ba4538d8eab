use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use patient_triage_domain::services::OutputSink;
use patient_triage_domain::{
    ClassificationConfig, ClassificationService, ClassificationServiceTrait, DiagnosticLogTrait,
    PatientAssessment, PatientRecord,
};

use crate::args::{Args, OutputFormat};

/// Exit status when the patient's age was rejected
pub const EXIT_REJECTED: u8 = 2;

/// Assess the patient described by `args`.
///
/// Patient lines go through the service's output sink; the optional
/// JSON report, log dump and thresholds are written to `writer`.
pub fn run<L, O, W>(
    args: &Args,
    service: &ClassificationService<L, O>,
    writer: &mut W,
) -> Result<PatientAssessment>
where
    L: DiagnosticLogTrait,
    O: OutputSink,
    W: Write,
{
    if args.show_config {
        write_config(writer, service.config())?;
    }

    let patient = PatientRecord::new(&args.name, args.age, &args.condition);
    let assessment = service
        .assess(&patient, args.systolic, args.diastolic, !args.quiet)
        .context("Failed to assess patient")?;

    info!(
        assessment_id = %assessment.id,
        status = ?assessment.status,
        "Assessment finished"
    );

    if args.format == OutputFormat::Json {
        write_assessment(writer, &assessment)?;
    }

    if args.show_log {
        write_log(writer, service.log())?;
    }

    Ok(assessment)
}

/// Process exit status for an assessment
pub fn exit_status(assessment: &PatientAssessment) -> u8 {
    if assessment.is_completed() {
        0
    } else {
        EXIT_REJECTED
    }
}

fn write_assessment<W: Write>(writer: &mut W, assessment: &PatientAssessment) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, assessment)
        .context("Failed to serialize assessment")?;
    writeln!(writer)?;
    Ok(())
}

fn write_config<W: Write>(writer: &mut W, config: &ClassificationConfig) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, config).context("Failed to serialize thresholds")?;
    writeln!(writer)?;
    Ok(())
}

fn write_log<W: Write, L: DiagnosticLogTrait>(writer: &mut W, log: &L) -> Result<()> {
    let entries = log.entries().context("Failed to read diagnostic log")?;
    for entry in entries {
        writeln!(writer, "{}", entry)?;
    }
    Ok(())
}
