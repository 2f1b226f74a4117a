use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::classifier::RiskCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Some(Self::Male),
            "female" | "f" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SmokingStatus {
    #[serde(alias = "Non-smoker")]
    Never,
    Former,
    Current,
}

impl SmokingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Former => "Former",
            Self::Current => "Current",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "never" | "non-smoker" | "nonsmoker" => Some(Self::Never),
            "former" => Some(Self::Former),
            "current" => Some(Self::Current),
            _ => None,
        }
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw clinical measurements for one assessment.
///
/// Built once per request, usually through [`super::ClinicalIntake`], and only ever
/// borrowed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub age: u8,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_m: f64,
    pub systolic_bp: u16,
    pub diastolic_bp: u16,
    pub heart_rate: u16,
    pub ejection_fraction: f64,
    pub bnp_level: f64,
    pub smoking_status: SmokingStatus,
    pub diabetes: bool,
    pub hypertension: bool,
    pub creatinine: f64,
    pub sodium: u16,
    pub potassium: f64,
    pub hemoglobin: f64,
}

impl PatientProfile {
    pub fn blood_pressure_label(&self) -> String {
        format!("{}/{}", self.systolic_bp, self.diastolic_bp)
    }
}

/// Scored outcome of one assessment. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub total_score: f64,
    pub category: RiskCategory,
    pub recommendations: Vec<String>,
    pub assessed_at: NaiveDateTime,
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
