use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::domain::PatientProfile;
use super::error::AssessmentError;
use super::metrics;

pub const SYSTOLIC_NOT_ABOVE_DIASTOLIC: &str = "Systolic BP must be greater than Diastolic BP";
pub const UNUSUAL_BMI: &str = "BMI value seems unusual. Please verify.";
pub const UNUSUAL_HEART_RATE: &str = "Heart rate is outside normal range. Please verify.";

const PLAUSIBLE_BMI: RangeInclusive<f64> = 15.0..=50.0;
const PLAUSIBLE_HEART_RATE: RangeInclusive<u16> = 40..=200;

/// Findings from [`validate`]. `ok` is false only when `errors` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub ok: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Converts hard failures into [`AssessmentError::InvalidInput`]; on success the
    /// warnings are handed back for the caller to surface.
    pub fn into_result(self) -> Result<Vec<String>, AssessmentError> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(AssessmentError::InvalidInput {
                errors: self.errors,
                warnings: self.warnings,
            })
        }
    }
}

pub fn validate(profile: &PatientProfile) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if profile.systolic_bp <= profile.diastolic_bp {
        errors.push(SYSTOLIC_NOT_ABOVE_DIASTOLIC.to_string());
    }

    match metrics::bmi(profile.weight_kg, profile.height_m) {
        Ok(bmi) if !PLAUSIBLE_BMI.contains(&bmi) => warnings.push(UNUSUAL_BMI.to_string()),
        Ok(_) => {}
        Err(err) => errors.push(err.to_string()),
    }

    if !PLAUSIBLE_HEART_RATE.contains(&profile.heart_rate) {
        warnings.push(UNUSUAL_HEART_RATE.to_string());
    }

    ValidationResult {
        ok: errors.is_empty(),
        errors,
        warnings,
    }
}
