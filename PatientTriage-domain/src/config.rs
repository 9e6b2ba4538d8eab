//! Fixed thresholds used by the classification rules.
//!
//! The values are compile-time constants; the structs exist so the rules
//! receive them explicitly and so they can be printed for inspection.

use serde::Serialize;

/// Lowest accepted age, inclusive
pub const MIN_AGE: i32 = 0;
/// Highest accepted age, inclusive
pub const MAX_AGE: i32 = 130;
/// Age from which a patient counts as an adult
pub const ADULT_AGE: i32 = 18;

/// Systolic reading above which (with diastolic) risk is high
pub const BP_SYS_HIGH_THRESHOLD: i32 = 150;
/// Diastolic reading above which (with systolic) risk is high
pub const BP_DIA_HIGH_THRESHOLD: i32 = 95;
/// Systolic reading above which risk is medium
pub const BP_SYS_MED_THRESHOLD: i32 = 130;
/// Lowest legal reading, inclusive
pub const BP_INVALID: i32 = 0;

/// Accepted age range and the adult boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeLimits {
    pub min_age: i32,
    pub max_age: i32,
    pub adult_age: i32,
}

impl AgeLimits {
    pub const DEFAULT: AgeLimits = AgeLimits {
        min_age: MIN_AGE,
        max_age: MAX_AGE,
        adult_age: ADULT_AGE,
    };

    /// Whether `age` lies within `[min_age, max_age]`
    pub fn accepts(&self, age: i32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

impl Default for AgeLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Blood pressure thresholds; every comparison against them is strict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodPressureThresholds {
    pub systolic_high: i32,
    pub diastolic_high: i32,
    pub systolic_medium: i32,
    pub min_reading: i32,
}

impl BloodPressureThresholds {
    pub const DEFAULT: BloodPressureThresholds = BloodPressureThresholds {
        systolic_high: BP_SYS_HIGH_THRESHOLD,
        diastolic_high: BP_DIA_HIGH_THRESHOLD,
        systolic_medium: BP_SYS_MED_THRESHOLD,
        min_reading: BP_INVALID,
    };
}

impl Default for BloodPressureThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// All thresholds used by the classification service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassificationConfig {
    pub age: AgeLimits,
    pub blood_pressure: BloodPressureThresholds,
}

impl ClassificationConfig {
    pub const DEFAULT: ClassificationConfig = ClassificationConfig {
        age: AgeLimits::DEFAULT,
        blood_pressure: BloodPressureThresholds::DEFAULT,
    };
}
