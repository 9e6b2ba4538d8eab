// Domain entities and value objects
pub mod patient;
pub mod risk;
pub mod age;
pub mod assessment;

// Re-export common types for easier imports
pub use patient::PatientRecord;
pub use risk::RiskLevel;
pub use age::AgeGroup;
pub use assessment::{AssessmentStatus, PatientAssessment};
