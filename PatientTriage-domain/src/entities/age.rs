use serde::{Deserialize, Serialize};

/// Minor or adult, decided from a validated age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Minor,
    Adult,
}

impl AgeGroup {
    /// Line printed once the patient has been placed in this group
    pub fn message(&self) -> &'static str {
        match self {
            Self::Minor => "Patient is a minor.",
            Self::Adult => "Patient is an adult.",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minor => write!(f, "minor"),
            Self::Adult => write!(f, "adult"),
        }
    }
}
