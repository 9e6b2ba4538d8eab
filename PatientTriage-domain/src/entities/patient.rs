use serde::{Deserialize, Serialize};

/// Identity, age and existing condition of a patient.
///
/// Nothing is validated on construction; an out-of-range age is legal here
/// and is only detected by the classification service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    name: String,
    age: i32,
    existing_condition: String,
}

impl PatientRecord {
    /// Create a new patient record
    pub fn new(name: impl Into<String>, age: i32, existing_condition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            existing_condition: existing_condition.into(),
        }
    }

    /// The patient's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The patient's age in years
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Free-form description of any existing condition
    pub fn existing_condition(&self) -> &str {
        &self.existing_condition
    }
}
