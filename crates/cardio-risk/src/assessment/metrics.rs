use serde::{Deserialize, Serialize};

use super::domain::PatientProfile;
use super::error::InvalidMeasurement;

/// Secondary values computed from a profile. Lives for one scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub bmi: f64,
}

impl DerivedMetrics {
    pub fn from_profile(profile: &PatientProfile) -> Result<Self, InvalidMeasurement> {
        Ok(Self {
            bmi: bmi(profile.weight_kg, profile.height_m)?,
        })
    }
}

/// Body mass index, unrounded. Display rounding is left to callers.
pub fn bmi(weight_kg: f64, height_m: f64) -> Result<f64, InvalidMeasurement> {
    if !(height_m.is_finite() && height_m > 0.0) {
        return Err(InvalidMeasurement::NonPositiveHeight(height_m));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(InvalidMeasurement::NonPositiveWeight(weight_kg));
    }

    Ok(weight_kg / (height_m * height_m))
}
