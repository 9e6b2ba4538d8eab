use serde::{Deserialize, Serialize};

/// Blood pressure risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// At least one reading was negative
    Invalid,
    /// Neither high nor medium
    Normal,
    /// Systolic above the medium threshold
    Medium,
    /// Systolic and diastolic both above their high thresholds
    High,
}

impl RiskLevel {
    /// Whether the readings could be classified at all
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid => write!(f, "INVALID"),
            Self::Normal => write!(f, "NORMAL"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}
