// PatientTriage Domain
// This crate contains the age validation and blood pressure classification logic

// Fixed classification thresholds
pub mod config;

// Domain entities
pub mod entities;

// Services that implement business logic
pub mod services;

// Re-export the diagnostic log from the data layer for convenience
pub use patient_triage_data::repository::{DiagnosticLog, DiagnosticLogTrait, LogError};
pub use patient_triage_data::models::LogEntry;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use config::ClassificationConfig;
pub use entities::{AgeGroup, AssessmentStatus, PatientAssessment, PatientRecord, RiskLevel};
pub use services::{ClassificationError, ClassificationService, ClassificationServiceTrait};
