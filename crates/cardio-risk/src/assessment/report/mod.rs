mod text;
pub mod views;

pub use text::SECTIONS;
pub use views::{
    ClinicalMeasurements, Demographics, LaboratoryValues, Report, VitalSigns, TIMESTAMP_FORMAT,
};

use super::domain::{PatientProfile, RiskAssessment};
use super::error::ConfigurationError;
use super::metrics::DerivedMetrics;
use super::scoring::ComponentScores;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("report is missing '{label}' in section {section}")]
    MissingField {
        section: &'static str,
        label: &'static str,
    },
    #[error("report field '{label}' has unreadable value '{value}'")]
    InvalidValue { label: &'static str, value: String },
    #[error("report line is not a 'Label: value' pair: {0}")]
    MalformedLine(String),
    #[error("report json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("report timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error(transparent)]
    Category(#[from] ConfigurationError),
}

/// Assembles the export record for one assessment.
pub fn build(
    profile: &PatientProfile,
    derived: &DerivedMetrics,
    scores: &ComponentScores,
    assessment: &RiskAssessment,
) -> Report {
    Report {
        demographics: Demographics {
            age: profile.age,
            sex: profile.sex,
            weight_kg: profile.weight_kg,
            height_m: profile.height_m,
            bmi: derived.bmi,
        },
        vital_signs: VitalSigns {
            systolic_bp: profile.systolic_bp,
            diastolic_bp: profile.diastolic_bp,
            heart_rate: profile.heart_rate,
        },
        clinical_measurements: ClinicalMeasurements {
            ejection_fraction: profile.ejection_fraction,
            bnp_level: profile.bnp_level,
            smoking_status: profile.smoking_status,
            diabetes: profile.diabetes,
            hypertension: profile.hypertension,
        },
        laboratory_values: LaboratoryValues {
            creatinine: profile.creatinine,
            sodium: profile.sodium,
            potassium: profile.potassium,
            hemoglobin: profile.hemoglobin,
        },
        risk_score: assessment.total_score,
        component_scores: *scores,
        category: assessment.category,
        recommendations: assessment.recommendations.clone(),
        timestamp: assessment.assessed_at.format(TIMESTAMP_FORMAT).to_string(),
    }
}
