use crate::config::{AgeLimits, BloodPressureThresholds};
use crate::entities::{AgeGroup, RiskLevel};

/// Place an age in its group, or `None` when it is outside the accepted range
pub fn categorize_age(age: i32, limits: &AgeLimits) -> Option<AgeGroup> {
    if !limits.accepts(age) {
        None
    } else if age < limits.adult_age {
        Some(AgeGroup::Minor)
    } else {
        Some(AgeGroup::Adult)
    }
}

/// Categorize blood pressure risk; the first matching tier wins.
///
/// Diastolic only takes part in the high tier.
pub fn categorize_blood_pressure(
    systolic: i32,
    diastolic: i32,
    thresholds: &BloodPressureThresholds,
) -> RiskLevel {
    if systolic < thresholds.min_reading || diastolic < thresholds.min_reading {
        RiskLevel::Invalid
    } else if systolic > thresholds.systolic_high && diastolic > thresholds.diastolic_high {
        RiskLevel::High
    } else if systolic > thresholds.systolic_medium {
        RiskLevel::Medium
    } else {
        RiskLevel::Normal
    }
}
