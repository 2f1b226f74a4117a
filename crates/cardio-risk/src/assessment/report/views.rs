use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::super::classifier::RiskCategory;
use super::super::domain::{PatientProfile, RiskAssessment, Sex, SmokingStatus};
use super::super::scoring::ComponentScores;
use super::{text, ReportError};

/// Both renderings write and read timestamps with this layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    pub age: u8,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub systolic_bp: u16,
    pub diastolic_bp: u16,
    pub heart_rate: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalMeasurements {
    pub ejection_fraction: f64,
    pub bnp_level: f64,
    pub smoking_status: SmokingStatus,
    pub diabetes: bool,
    pub hypertension: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaboratoryValues {
    pub creatinine: f64,
    pub sodium: u16,
    pub potassium: f64,
    pub hemoglobin: f64,
}

/// Canonical export record. The JSON and plain-text renderers both read from and
/// parse back into this one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub demographics: Demographics,
    pub vital_signs: VitalSigns,
    pub clinical_measurements: ClinicalMeasurements,
    pub laboratory_values: LaboratoryValues,
    pub risk_score: f64,
    pub component_scores: ComponentScores,
    pub category: RiskCategory,
    pub recommendations: Vec<String>,
    pub timestamp: String,
}

impl Report {
    pub fn patient_profile(&self) -> PatientProfile {
        PatientProfile {
            age: self.demographics.age,
            sex: self.demographics.sex,
            weight_kg: self.demographics.weight_kg,
            height_m: self.demographics.height_m,
            systolic_bp: self.vital_signs.systolic_bp,
            diastolic_bp: self.vital_signs.diastolic_bp,
            heart_rate: self.vital_signs.heart_rate,
            ejection_fraction: self.clinical_measurements.ejection_fraction,
            bnp_level: self.clinical_measurements.bnp_level,
            smoking_status: self.clinical_measurements.smoking_status,
            diabetes: self.clinical_measurements.diabetes,
            hypertension: self.clinical_measurements.hypertension,
            creatinine: self.laboratory_values.creatinine,
            sodium: self.laboratory_values.sodium,
            potassium: self.laboratory_values.potassium,
            hemoglobin: self.laboratory_values.hemoglobin,
        }
    }

    pub fn assessment(&self) -> Result<RiskAssessment, ReportError> {
        let assessed_at = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)?;

        Ok(RiskAssessment {
            total_score: self.risk_score,
            category: self.category,
            recommendations: self.recommendations.clone(),
            assessed_at,
        })
    }

    /// The five parameters the calculator charts, in display order.
    pub fn clinical_parameters(&self) -> [(&'static str, f64); 5] {
        [
            ("Age", f64::from(self.demographics.age)),
            ("BMI", self.demographics.bmi),
            ("Systolic BP", f64::from(self.vital_signs.systolic_bp)),
            ("Diastolic BP", f64::from(self.vital_signs.diastolic_bp)),
            ("Heart Rate", f64::from(self.vital_signs.heart_rate)),
        ]
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_text(&self) -> String {
        text::render(self)
    }

    pub fn from_text(raw: &str) -> Result<Self, ReportError> {
        text::parse(raw)
    }
}
