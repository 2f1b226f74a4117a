use super::super::domain::{PatientProfile, SmokingStatus};
use super::super::metrics::DerivedMetrics;
use super::ComponentScores;

const MIN_AGE: f64 = 18.0;
const MAX_AGE: f64 = 120.0;
const AGE_POINTS: f64 = 25.0;

const RESTING_HEART_RATE: f64 = 75.0;
const NORMAL_EJECTION_FRACTION: f64 = 55.0;

pub(crate) fn score_components(
    profile: &PatientProfile,
    derived: &DerivedMetrics,
) -> ComponentScores {
    ComponentScores {
        age_score: age_score(profile.age),
        bmi_score: bmi_score(derived.bmi),
        bp_score: bp_score(profile.systolic_bp, profile.diastolic_bp),
        heart_rate_score: heart_rate_score(profile.heart_rate),
        ejection_fraction_score: ejection_fraction_score(profile.ejection_fraction),
        risk_factor_score: risk_factor_score(
            profile.smoking_status,
            profile.diabetes,
            profile.hypertension,
        ),
    }
}

/// Linear over the adult age domain, up to 25 points at 120.
pub fn age_score(age: u8) -> f64 {
    (f64::from(age) - MIN_AGE) / (MAX_AGE - MIN_AGE) * AGE_POINTS
}

pub fn bmi_score(bmi: f64) -> f64 {
    if bmi < 18.5 {
        15.0
    } else if bmi < 25.0 {
        0.0
    } else if bmi < 30.0 {
        10.0
    } else {
        20.0
    }
}

pub fn bp_score(systolic: u16, diastolic: u16) -> f64 {
    if systolic >= 180 || diastolic >= 120 {
        25.0
    } else if systolic >= 140 || diastolic >= 90 {
        15.0
    } else if systolic >= 130 || diastolic >= 80 {
        10.0
    } else {
        0.0
    }
}

pub fn heart_rate_score(heart_rate: u16) -> f64 {
    (f64::from(heart_rate) - RESTING_HEART_RATE).abs() / 2.0
}

pub fn ejection_fraction_score(ejection_fraction: f64) -> f64 {
    (NORMAL_EJECTION_FRACTION - ejection_fraction).max(0.0) * 0.5
}

pub fn risk_factor_score(smoking: SmokingStatus, diabetes: bool, hypertension: bool) -> f64 {
    let smoking_term = match smoking {
        SmokingStatus::Current => 15.0,
        SmokingStatus::Former => 7.0,
        SmokingStatus::Never => 0.0,
    };
    let diabetes_term = if diabetes { 10.0 } else { 0.0 };
    let hypertension_term = if hypertension { 10.0 } else { 0.0 };

    smoking_term + diabetes_term + hypertension_term
}
