use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AgeGroup, PatientRecord, RiskLevel};

/// Whether the assessment ran to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    /// Age was valid and blood pressure was classified
    Completed,
    /// Age was out of range; processing stopped before classification
    Rejected,
}

/// Outcome of assessing one patient, handed on for further processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientAssessment {
    /// Unique identifier for this assessment
    pub id: Uuid,

    /// Name of the assessed patient
    pub patient_name: String,

    /// Age as supplied by the caller
    pub age: i32,

    /// Minor or adult; absent when the age was rejected
    pub age_group: Option<AgeGroup>,

    /// Blood pressure risk; absent when the age was rejected
    pub risk: Option<RiskLevel>,

    /// Whether processing completed
    pub status: AssessmentStatus,

    /// When the assessment was produced
    pub generated_at: DateTime<Utc>,
}

impl PatientAssessment {
    /// Assessment for a patient whose age and readings were both processed
    pub fn completed(patient: &PatientRecord, age_group: AgeGroup, risk: RiskLevel) -> Self {
        Self::build(patient, Some(age_group), Some(risk), AssessmentStatus::Completed)
    }

    /// Assessment for a patient whose age was out of range
    pub fn rejected(patient: &PatientRecord) -> Self {
        Self::build(patient, None, None, AssessmentStatus::Rejected)
    }

    fn build(
        patient: &PatientRecord,
        age_group: Option<AgeGroup>,
        risk: Option<RiskLevel>,
        status: AssessmentStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_name: patient.name().to_string(),
            age: patient.age(),
            age_group,
            risk,
            status,
            generated_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == AssessmentStatus::Completed
    }
}
