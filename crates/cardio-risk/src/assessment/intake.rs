use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{PatientProfile, Sex, SmokingStatus};

/// Raw values as collected by a form or request body, before any domain checks.
///
/// Missing fields fall back to the calculator's default form values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicalIntake {
    pub age: i64,
    pub sex: String,
    pub weight_kg: f64,
    pub height_m: f64,
    pub systolic_bp: i64,
    pub diastolic_bp: i64,
    pub heart_rate: i64,
    pub ejection_fraction: f64,
    pub bnp_level: f64,
    pub smoking_status: String,
    #[serde(deserialize_with = "yes_no_flag")]
    pub diabetes: String,
    #[serde(deserialize_with = "yes_no_flag")]
    pub hypertension: String,
    pub creatinine: f64,
    pub sodium: i64,
    pub potassium: f64,
    pub hemoglobin: f64,
}

impl Default for ClinicalIntake {
    fn default() -> Self {
        Self {
            age: 50,
            sex: "Male".to_string(),
            weight_kg: 70.0,
            height_m: 1.7,
            systolic_bp: 120,
            diastolic_bp: 80,
            heart_rate: 75,
            ejection_fraction: 55.0,
            bnp_level: 100.0,
            smoking_status: "Never".to_string(),
            diabetes: "No".to_string(),
            hypertension: "No".to_string(),
            creatinine: 1.0,
            sodium: 140,
            potassium: 4.0,
            hemoglobin: 14.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{field} has unrecognized value '{value}'")]
    UnknownChoice { field: &'static str, value: String },
}

impl TryFrom<ClinicalIntake> for PatientProfile {
    type Error = IntakeError;

    fn try_from(intake: ClinicalIntake) -> Result<Self, Self::Error> {
        let age = bounded_int("age", intake.age, 18, 120, "between 18 and 120")?;
        let sex = Sex::from_label(&intake.sex).ok_or_else(|| IntakeError::UnknownChoice {
            field: "sex",
            value: intake.sex.clone(),
        })?;
        let smoking_status = SmokingStatus::from_label(&intake.smoking_status).ok_or_else(|| {
            IntakeError::UnknownChoice {
                field: "smoking_status",
                value: intake.smoking_status.clone(),
            }
        })?;

        Ok(PatientProfile {
            age: age as u8,
            sex,
            weight_kg: positive("weight_kg", intake.weight_kg)?,
            height_m: positive("height_m", intake.height_m)?,
            systolic_bp: unsigned("systolic_bp", intake.systolic_bp)?,
            diastolic_bp: unsigned("diastolic_bp", intake.diastolic_bp)?,
            heart_rate: unsigned("heart_rate", intake.heart_rate)?,
            ejection_fraction: bounded_float(
                "ejection_fraction",
                intake.ejection_fraction,
                10.0,
                80.0,
                "between 10 and 80",
            )?,
            bnp_level: non_negative("bnp_level", intake.bnp_level)?,
            smoking_status,
            diabetes: flag("diabetes", &intake.diabetes)?,
            hypertension: flag("hypertension", &intake.hypertension)?,
            creatinine: non_negative("creatinine", intake.creatinine)?,
            sodium: unsigned("sodium", intake.sodium)?,
            potassium: finite("potassium", intake.potassium)?,
            hemoglobin: finite("hemoglobin", intake.hemoglobin)?,
        })
    }
}

fn bounded_int(
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
    expected: &'static str,
) -> Result<i64, IntakeError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range(field, value, expected))
    }
}

fn unsigned(field: &'static str, value: i64) -> Result<u16, IntakeError> {
    u16::try_from(value).map_err(|_| out_of_range(field, value, "a whole number from 0 to 65535"))
}

fn bounded_float(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    expected: &'static str,
) -> Result<f64, IntakeError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range(field, value, expected))
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, IntakeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(out_of_range(field, value, "greater than zero"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, IntakeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(out_of_range(field, value, "zero or greater"))
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, IntakeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(out_of_range(field, value, "a finite number"))
    }
}

fn flag(field: &'static str, raw: &str) -> Result<bool, IntakeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Ok(true),
        "no" | "false" => Ok(false),
        _ => Err(IntakeError::UnknownChoice {
            field,
            value: raw.to_string(),
        }),
    }
}

fn out_of_range(field: &'static str, value: impl ToString, expected: &'static str) -> IntakeError {
    IntakeError::OutOfRange {
        field,
        value: value.to_string(),
        expected,
    }
}

/// Accepts either a JSON boolean or a "Yes"/"No" string.
fn yes_no_flag<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    Ok(match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(true) => "Yes".to_string(),
        RawFlag::Bool(false) => "No".to_string(),
        RawFlag::Text(text) => text,
    })
}
