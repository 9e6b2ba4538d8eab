use thiserror::Error;
use tracing::{debug, info};

use patient_triage_data::repository::{DiagnosticLog, DiagnosticLogTrait, LogError};

use crate::config::ClassificationConfig;
use crate::entities::{AgeGroup, PatientAssessment, PatientRecord, RiskLevel};
use crate::services::output::{ConsoleOutput, OutputSink};
use crate::services::rules::{categorize_age, categorize_blood_pressure};

/// Log entry written when a blood pressure reading is negative.
///
/// Kept word for word, typo included, for consumers matching on it.
pub const INVALID_READING_LOG_MESSAGE: &str = "Invalid patient BbSys or bpDia value";

/// Classification service errors
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// Age outside the accepted range; processing of the patient stops
    #[error("Invalid age {age}: must be between {min} and {max}")]
    InvalidAge { age: i32, min: i32, max: i32 },

    /// Diagnostic log error
    #[error("Diagnostic log error: {0}")]
    Log(#[from] LogError),

    /// Output sink error
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Trait for classification service operations
pub trait ClassificationServiceTrait {
    /// Validate the patient's age and place them in an age group.
    ///
    /// Returns [`ClassificationError::InvalidAge`] when the caller should
    /// stop processing the patient.
    fn validate_age(&self, patient: &PatientRecord) -> Result<AgeGroup, ClassificationError>;

    /// Classify a blood pressure reading.
    ///
    /// Negative readings yield [`RiskLevel::Invalid`] rather than an error.
    fn classify_blood_pressure(
        &self,
        patient: &PatientRecord,
        bp_sys: i32,
        bp_dia: i32,
        print_result: bool,
    ) -> Result<RiskLevel, ClassificationError>;

    /// Validate the age and, unless it was rejected, classify blood pressure
    fn assess(
        &self,
        patient: &PatientRecord,
        bp_sys: i32,
        bp_dia: i32,
        print_result: bool,
    ) -> Result<PatientAssessment, ClassificationError> {
        let age_group = match self.validate_age(patient) {
            Ok(age_group) => age_group,
            Err(ClassificationError::InvalidAge { .. }) => {
                return Ok(PatientAssessment::rejected(patient));
            }
            Err(err) => return Err(err),
        };

        let risk = self.classify_blood_pressure(patient, bp_sys, bp_dia, print_result)?;

        Ok(PatientAssessment::completed(patient, age_group, risk))
    }
}

/// Classification service over an injected diagnostic log and output sink
pub struct ClassificationService<L: DiagnosticLogTrait, O: OutputSink> {
    log: L,
    output: O,
    config: ClassificationConfig,
}

impl<L: DiagnosticLogTrait, O: OutputSink> ClassificationService<L, O> {
    /// Create a new classification service using the fixed thresholds
    pub fn new(log: L, output: O) -> Self {
        Self {
            log,
            output,
            config: ClassificationConfig::DEFAULT,
        }
    }

    /// Thresholds in use
    pub fn config(&self) -> &ClassificationConfig {
        &self.config
    }

    /// The diagnostic log this service appends to
    pub fn log(&self) -> &L {
        &self.log
    }
}

impl<L: DiagnosticLogTrait, O: OutputSink> ClassificationServiceTrait
    for ClassificationService<L, O>
{
    fn validate_age(&self, patient: &PatientRecord) -> Result<AgeGroup, ClassificationError> {
        let limits = &self.config.age;

        let Some(age_group) = categorize_age(patient.age(), limits) else {
            info!(
                patient = patient.name(),
                age = patient.age(),
                min_age = limits.min_age,
                max_age = limits.max_age,
                "Patient age out of range"
            );
            self.output.emit(&format!("Invalid age!{}", patient.age()))?;
            self.log.append(format!("Invalid patient: {}", patient.name()))?;
            return Err(ClassificationError::InvalidAge {
                age: patient.age(),
                min: limits.min_age,
                max: limits.max_age,
            });
        };

        self.output.emit(age_group.message())?;
        self.log.append(format!("Processed patient {}", patient.name()))?;

        info!(patient = patient.name(), %age_group, "Patient age validated");
        Ok(age_group)
    }

    fn classify_blood_pressure(
        &self,
        patient: &PatientRecord,
        bp_sys: i32,
        bp_dia: i32,
        print_result: bool,
    ) -> Result<RiskLevel, ClassificationError> {
        let risk = categorize_blood_pressure(bp_sys, bp_dia, &self.config.blood_pressure);

        if !risk.is_valid() {
            info!(patient = patient.name(), bp_sys, bp_dia, "Negative blood pressure reading");
            self.log.append(INVALID_READING_LOG_MESSAGE.to_string())?;
            return Ok(risk);
        }

        debug!(patient = patient.name(), bp_sys, bp_dia, %risk, "Blood pressure classified");

        if print_result {
            self.output
                .emit(&format!("Patient {}: score={}", patient.name(), risk))?;
        }

        Ok(risk)
    }
}

/// Create a classification service writing to stdout and the process-wide log
pub fn create_default_classification_service(
) -> ClassificationService<DiagnosticLog, ConsoleOutput> {
    ClassificationService::new(DiagnosticLog::global(), ConsoleOutput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::AssessmentStatus;
    use crate::testing::CapturedOutput;
    use patient_triage_data::models::LogEntry;

    mockall::mock! {
        pub Log {}

        impl DiagnosticLogTrait for Log {
            fn append(&self, message: String) -> Result<(), LogError>;
            fn entries(&self) -> Result<Vec<LogEntry>, LogError>;
            fn messages(&self) -> Result<Vec<String>, LogError>;
            fn len(&self) -> Result<usize, LogError>;
            fn is_empty(&self) -> Result<bool, LogError>;
        }
    }

    mockall::mock! {
        pub Output {}

        impl OutputSink for Output {
            fn emit(&self, line: &str) -> std::io::Result<()>;
        }
    }

    fn full_device_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::Other, "No space left on device")
    }

    /// Create a service over a fresh log and a capturing output
    fn create_test_service() -> (
        ClassificationService<DiagnosticLog, CapturedOutput>,
        DiagnosticLog,
        CapturedOutput,
    ) {
        let log = DiagnosticLog::new();
        let output = CapturedOutput::new();
        let service = ClassificationService::new(log.clone(), output.clone());
        (service, log, output)
    }

    #[test]
    fn test_validate_age_adult() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let result = service.validate_age(&patient).unwrap();

        assert_eq!(result, AgeGroup::Adult);
        assert_eq!(output.lines(), vec!["Patient is an adult."]);
        assert_eq!(log.messages().unwrap(), vec!["Processed patient Alice"]);
    }

    #[test]
    fn test_validate_age_minor() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Tim", 7, "asthma");

        let result = service.validate_age(&patient).unwrap();

        assert_eq!(result, AgeGroup::Minor);
        assert_eq!(output.lines(), vec!["Patient is a minor."]);
        assert_eq!(log.messages().unwrap(), vec!["Processed patient Tim"]);
    }

    #[test]
    fn test_validate_age_out_of_range_stops_processing() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Bob", 200, "none");

        let result = service.validate_age(&patient);

        match result {
            Err(ClassificationError::InvalidAge { age, min, max }) => {
                assert_eq!((age, min, max), (200, 0, 130));
            }
            other => panic!("expected InvalidAge, got {:?}", other),
        }
        assert_eq!(output.lines(), vec!["Invalid age!200"]);
        assert_eq!(log.messages().unwrap(), vec!["Invalid patient: Bob"]);
    }

    #[test]
    fn test_validate_age_negative() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Eve", -1, "none");

        assert!(service.validate_age(&patient).is_err());
        assert_eq!(output.lines(), vec!["Invalid age!-1"]);
        assert_eq!(log.messages().unwrap(), vec!["Invalid patient: Eve"]);
    }

    #[test]
    fn test_validate_age_every_accepted_age_logs_once() {
        for age in [0, 1, 17, 18, 19, 64, 129, 130] {
            let (service, log, output) = create_test_service();
            let patient = PatientRecord::new("Pat", age, "none");

            assert!(service.validate_age(&patient).is_ok(), "age {}", age);

            let lines = output.lines();
            assert!(!lines.iter().any(|l| l.starts_with("Invalid age!")));
            assert_eq!(log.messages().unwrap(), vec!["Processed patient Pat"]);
        }
    }

    #[test]
    fn test_validate_age_every_rejected_age_logs_once() {
        for age in [i32::MIN, -100, -1, 131, 200, i32::MAX] {
            let (service, log, output) = create_test_service();
            let patient = PatientRecord::new("Pat", age, "none");

            assert!(service.validate_age(&patient).is_err(), "age {}", age);
            assert_eq!(output.lines(), vec![format!("Invalid age!{}", age)]);
            assert_eq!(log.messages().unwrap(), vec!["Invalid patient: Pat"]);
        }
    }

    #[test]
    fn test_classify_blood_pressure_prints_score() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let risk = service
            .classify_blood_pressure(&patient, 160, 100, true)
            .unwrap();

        assert_eq!(risk, RiskLevel::High);
        assert_eq!(output.lines(), vec!["Patient Alice: score=HIGH"]);
        assert!(log.is_empty().unwrap());
    }

    #[test]
    fn test_classify_blood_pressure_quiet() {
        let (service, _log, output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let risk = service
            .classify_blood_pressure(&patient, 140, 80, false)
            .unwrap();

        assert_eq!(risk, RiskLevel::Medium);
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_classify_blood_pressure_boundaries() {
        let (service, _log, _output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let cases = [
            (151, 96, RiskLevel::High),
            (150, 96, RiskLevel::Medium),
            (131, 0, RiskLevel::Medium),
            (130, 200, RiskLevel::Normal),
            (0, 0, RiskLevel::Normal),
        ];

        for (sys, dia, expected) in cases {
            let risk = service
                .classify_blood_pressure(&patient, sys, dia, false)
                .unwrap();
            assert_eq!(risk, expected, "reading {}/{}", sys, dia);
        }
    }

    #[test]
    fn test_classify_blood_pressure_negative_reading() {
        for print_result in [true, false] {
            let (service, log, output) = create_test_service();
            let patient = PatientRecord::new("Alice", 45, "none");

            let risk = service
                .classify_blood_pressure(&patient, -1, 80, print_result)
                .unwrap();

            assert_eq!(risk, RiskLevel::Invalid);
            assert!(output.lines().is_empty());
            assert_eq!(log.messages().unwrap(), vec![INVALID_READING_LOG_MESSAGE]);
        }
    }

    #[test]
    fn test_classify_blood_pressure_is_idempotent() {
        let (service, log, _output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let first = service
            .classify_blood_pressure(&patient, 135, 90, true)
            .unwrap();
        let second = service
            .classify_blood_pressure(&patient, 135, 90, true)
            .unwrap();

        assert_eq!(first, second);
        assert!(log.is_empty().unwrap());
    }

    #[test]
    fn test_valid_reading_never_touches_log() {
        let mut log = MockLog::new();
        log.expect_append().never();

        let service = ClassificationService::new(log, CapturedOutput::new());
        let patient = PatientRecord::new("Alice", 45, "none");

        let risk = service
            .classify_blood_pressure(&patient, 120, 80, true)
            .unwrap();
        assert_eq!(risk, RiskLevel::Normal);
    }

    #[test]
    fn test_negative_reading_appends_exact_message() {
        let mut log = MockLog::new();
        log.expect_append()
            .withf(|message: &String| message == INVALID_READING_LOG_MESSAGE)
            .times(1)
            .returning(|_| Ok(()));

        let service = ClassificationService::new(log, CapturedOutput::new());
        let patient = PatientRecord::new("Alice", 45, "none");

        let risk = service
            .classify_blood_pressure(&patient, 120, -5, false)
            .unwrap();
        assert_eq!(risk, RiskLevel::Invalid);
    }

    #[test]
    fn test_log_failure_is_propagated() {
        let mut log = MockLog::new();
        log.expect_append()
            .returning(|_| Err(LogError::Lock("poisoned".to_string())));

        let service = ClassificationService::new(log, CapturedOutput::new());
        let patient = PatientRecord::new("Alice", 45, "none");

        let result = service.validate_age(&patient);
        assert!(matches!(result, Err(ClassificationError::Log(LogError::Lock(_)))));

        let result = service.assess(&patient, 120, 80, false);
        assert!(matches!(result, Err(ClassificationError::Log(_))));
    }

    #[test]
    fn test_output_failure_is_propagated_from_validate_age() {
        let mut output = MockOutput::new();
        output.expect_emit().times(1).returning(|_| Err(full_device_error()));

        let service = ClassificationService::new(DiagnosticLog::new(), output);
        let patient = PatientRecord::new("Alice", 45, "none");

        let result = service.validate_age(&patient);
        assert!(matches!(result, Err(ClassificationError::Output(_))));
    }

    #[test]
    fn test_output_failure_on_rejected_age_is_not_a_rejection() {
        let mut output = MockOutput::new();
        output.expect_emit().returning(|_| Err(full_device_error()));

        let service = ClassificationService::new(DiagnosticLog::new(), output);
        let patient = PatientRecord::new("Bob", 200, "none");

        let result = service.assess(&patient, 120, 80, true);
        assert!(matches!(result, Err(ClassificationError::Output(_))));
    }

    #[test]
    fn test_output_failure_is_propagated_from_score_line() {
        let mut output = MockOutput::new();
        output
            .expect_emit()
            .withf(|line: &str| line == "Patient Alice: score=HIGH")
            .times(1)
            .returning(|_| Err(full_device_error()));

        let service = ClassificationService::new(DiagnosticLog::new(), output);
        let patient = PatientRecord::new("Alice", 45, "none");

        let result = service.classify_blood_pressure(&patient, 160, 100, true);
        assert!(matches!(result, Err(ClassificationError::Output(_))));
    }

    #[test]
    fn test_quiet_classification_never_writes_output() {
        let mut output = MockOutput::new();
        output.expect_emit().never();

        let service = ClassificationService::new(DiagnosticLog::new(), output);
        let patient = PatientRecord::new("Alice", 45, "none");

        let risk = service
            .classify_blood_pressure(&patient, 160, 100, false)
            .unwrap();
        assert_eq!(risk, RiskLevel::High);
    }

    #[test]
    fn test_assess_completed() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Alice", 45, "none");

        let assessment = service.assess(&patient, 160, 100, true).unwrap();

        assert_eq!(assessment.status, AssessmentStatus::Completed);
        assert_eq!(assessment.age_group, Some(AgeGroup::Adult));
        assert_eq!(assessment.risk, Some(RiskLevel::High));
        assert_eq!(
            output.lines(),
            vec!["Patient is an adult.", "Patient Alice: score=HIGH"]
        );
        assert_eq!(log.messages().unwrap(), vec!["Processed patient Alice"]);
    }

    #[test]
    fn test_assess_rejected_skips_classification() {
        let (service, log, output) = create_test_service();
        let patient = PatientRecord::new("Bob", 200, "none");

        let assessment = service.assess(&patient, -1, -1, true).unwrap();

        assert_eq!(assessment.status, AssessmentStatus::Rejected);
        assert!(assessment.risk.is_none());
        assert_eq!(output.lines(), vec!["Invalid age!200"]);
        // No invalid-reading entry: classification never ran
        assert_eq!(log.messages().unwrap(), vec!["Invalid patient: Bob"]);
    }

    #[test]
    fn test_log_is_shared_across_calls_in_order() {
        let (service, log, _output) = create_test_service();

        service
            .validate_age(&PatientRecord::new("Alice", 45, "none"))
            .unwrap();
        let _ = service.validate_age(&PatientRecord::new("Bob", 200, "none"));
        service
            .classify_blood_pressure(&PatientRecord::new("Carol", 30, "none"), -3, 70, true)
            .unwrap();

        assert_eq!(
            log.messages().unwrap(),
            vec![
                "Processed patient Alice",
                "Invalid patient: Bob",
                INVALID_READING_LOG_MESSAGE,
            ]
        );
    }

    #[test]
    fn test_default_service_uses_global_log() {
        let service = create_default_classification_service();
        assert!(service.log().shares_storage_with(&DiagnosticLog::global()));
        assert_eq!(service.config(), &ClassificationConfig::DEFAULT);
    }
}
