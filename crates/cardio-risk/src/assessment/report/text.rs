use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::str::FromStr;

use super::super::domain::{yes_no, Sex, SmokingStatus};
use super::super::scoring::ComponentScores;
use super::views::{
    ClinicalMeasurements, Demographics, LaboratoryValues, Report, VitalSigns, TIMESTAMP_FORMAT,
};
use super::ReportError;

const TITLE: &str = "HEART FAILURE RISK ASSESSMENT REPORT";

const RISK_ASSESSMENT: &str = "RISK ASSESSMENT";
const PATIENT_DATA: &str = "PATIENT DATA";
const RISK_FACTORS: &str = "RISK FACTORS";
const CLINICAL_MEASUREMENTS: &str = "CLINICAL MEASUREMENTS";
const LABORATORY_VALUES: &str = "LABORATORY VALUES";
const RECOMMENDATIONS: &str = "RECOMMENDATIONS";

/// Section headers in the order they are written.
pub const SECTIONS: [&str; 6] = [
    RISK_ASSESSMENT,
    PATIENT_DATA,
    RISK_FACTORS,
    CLINICAL_MEASUREMENTS,
    LABORATORY_VALUES,
    RECOMMENDATIONS,
];

const RISK_SCORE: &str = "Risk Score";
const RISK_CATEGORY: &str = "Risk Category";
const TIMESTAMP: &str = "Timestamp";
const AGE_SCORE: &str = "Age Score";
const BMI_SCORE: &str = "BMI Score";
const BP_SCORE: &str = "Blood Pressure Score";
const RISK_FACTOR_SCORE: &str = "Risk Factor Score";
const EF_SCORE: &str = "Ejection Fraction Score";
const HEART_RATE_SCORE: &str = "Heart Rate Score (unweighted)";

const AGE: &str = "Age";
const SEX: &str = "Sex";
const WEIGHT: &str = "Weight (kg)";
const HEIGHT: &str = "Height (m)";
const BMI: &str = "BMI";
const SYSTOLIC: &str = "Systolic BP (mmHg)";
const DIASTOLIC: &str = "Diastolic BP (mmHg)";
const HEART_RATE: &str = "Heart Rate (bpm)";

const SMOKING: &str = "Smoking Status";
const DIABETES: &str = "Diabetes";
const HYPERTENSION: &str = "Hypertension";

const EJECTION_FRACTION: &str = "Ejection Fraction (%)";
const BNP: &str = "BNP Level (pg/mL)";

const CREATININE: &str = "Creatinine (mg/dL)";
const SODIUM: &str = "Sodium (mEq/L)";
const POTASSIUM: &str = "Potassium (mEq/L)";
const HEMOGLOBIN: &str = "Hemoglobin (g/dL)";

// Floats are written with `Display`, which prints the shortest form that parses back
// to the same bits.
pub(super) fn render(report: &Report) -> String {
    let scores = &report.component_scores;
    let demographics = &report.demographics;
    let vitals = &report.vital_signs;
    let clinical = &report.clinical_measurements;
    let labs = &report.laboratory_values;

    let mut out = String::new();
    out.push_str(TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(TITLE.len()));
    out.push('\n');

    section(
        &mut out,
        RISK_ASSESSMENT,
        &[
            (RISK_SCORE, report.risk_score.to_string()),
            (RISK_CATEGORY, report.category.to_string()),
            (TIMESTAMP, report.timestamp.clone()),
            (AGE_SCORE, scores.age_score.to_string()),
            (BMI_SCORE, scores.bmi_score.to_string()),
            (BP_SCORE, scores.bp_score.to_string()),
            (RISK_FACTOR_SCORE, scores.risk_factor_score.to_string()),
            (EF_SCORE, scores.ejection_fraction_score.to_string()),
            (HEART_RATE_SCORE, scores.heart_rate_score.to_string()),
        ],
    );
    section(
        &mut out,
        PATIENT_DATA,
        &[
            (AGE, demographics.age.to_string()),
            (SEX, demographics.sex.to_string()),
            (WEIGHT, demographics.weight_kg.to_string()),
            (HEIGHT, demographics.height_m.to_string()),
            (BMI, demographics.bmi.to_string()),
            (SYSTOLIC, vitals.systolic_bp.to_string()),
            (DIASTOLIC, vitals.diastolic_bp.to_string()),
            (HEART_RATE, vitals.heart_rate.to_string()),
        ],
    );
    section(
        &mut out,
        RISK_FACTORS,
        &[
            (SMOKING, clinical.smoking_status.to_string()),
            (DIABETES, yes_no(clinical.diabetes).to_string()),
            (HYPERTENSION, yes_no(clinical.hypertension).to_string()),
        ],
    );
    section(
        &mut out,
        CLINICAL_MEASUREMENTS,
        &[
            (EJECTION_FRACTION, clinical.ejection_fraction.to_string()),
            (BNP, clinical.bnp_level.to_string()),
        ],
    );
    section(
        &mut out,
        LABORATORY_VALUES,
        &[
            (CREATININE, labs.creatinine.to_string()),
            (SODIUM, labs.sodium.to_string()),
            (POTASSIUM, labs.potassium.to_string()),
            (HEMOGLOBIN, labs.hemoglobin.to_string()),
        ],
    );

    out.push('\n');
    out.push_str(RECOMMENDATIONS);
    out.push('\n');
    for item in &report.recommendations {
        out.push_str("- ");
        out.push_str(item);
        out.push('\n');
    }

    out
}

fn section(out: &mut String, name: &str, lines: &[(&str, String)]) {
    out.push('\n');
    out.push_str(name);
    out.push('\n');
    for (label, value) in lines {
        out.push_str(&format!("{label}: {value}\n"));
    }
}

pub(super) fn parse(raw: &str) -> Result<Report, ReportError> {
    let mut fields = Fields::default();
    let mut recommendations = Vec::new();
    let mut current: Option<&'static str> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = SECTIONS.iter().find(|name| **name == trimmed) {
            current = Some(*name);
            continue;
        }

        // Title and underline precede the first section.
        let Some(section) = current else {
            continue;
        };

        if section == RECOMMENDATIONS {
            let item = line
                .strip_prefix("- ")
                .ok_or_else(|| ReportError::MalformedLine(line.to_string()))?;
            recommendations.push(item.to_string());
            continue;
        }

        let (label, value) = line
            .split_once(": ")
            .ok_or_else(|| ReportError::MalformedLine(line.to_string()))?;
        fields
            .values
            .insert((section, label.trim().to_string()), value.trim().to_string());
    }

    let timestamp: String = fields.get(RISK_ASSESSMENT, TIMESTAMP)?.to_string();
    NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)?;

    Ok(Report {
        demographics: Demographics {
            age: fields.parse(PATIENT_DATA, AGE)?,
            sex: fields.choice(PATIENT_DATA, SEX, Sex::from_label)?,
            weight_kg: fields.parse(PATIENT_DATA, WEIGHT)?,
            height_m: fields.parse(PATIENT_DATA, HEIGHT)?,
            bmi: fields.parse(PATIENT_DATA, BMI)?,
        },
        vital_signs: VitalSigns {
            systolic_bp: fields.parse(PATIENT_DATA, SYSTOLIC)?,
            diastolic_bp: fields.parse(PATIENT_DATA, DIASTOLIC)?,
            heart_rate: fields.parse(PATIENT_DATA, HEART_RATE)?,
        },
        clinical_measurements: ClinicalMeasurements {
            ejection_fraction: fields.parse(CLINICAL_MEASUREMENTS, EJECTION_FRACTION)?,
            bnp_level: fields.parse(CLINICAL_MEASUREMENTS, BNP)?,
            smoking_status: fields.choice(RISK_FACTORS, SMOKING, SmokingStatus::from_label)?,
            diabetes: fields.choice(RISK_FACTORS, DIABETES, parse_yes_no)?,
            hypertension: fields.choice(RISK_FACTORS, HYPERTENSION, parse_yes_no)?,
        },
        laboratory_values: LaboratoryValues {
            creatinine: fields.parse(LABORATORY_VALUES, CREATININE)?,
            sodium: fields.parse(LABORATORY_VALUES, SODIUM)?,
            potassium: fields.parse(LABORATORY_VALUES, POTASSIUM)?,
            hemoglobin: fields.parse(LABORATORY_VALUES, HEMOGLOBIN)?,
        },
        risk_score: fields.parse(RISK_ASSESSMENT, RISK_SCORE)?,
        component_scores: ComponentScores {
            age_score: fields.parse(RISK_ASSESSMENT, AGE_SCORE)?,
            bmi_score: fields.parse(RISK_ASSESSMENT, BMI_SCORE)?,
            bp_score: fields.parse(RISK_ASSESSMENT, BP_SCORE)?,
            heart_rate_score: fields.parse(RISK_ASSESSMENT, HEART_RATE_SCORE)?,
            ejection_fraction_score: fields.parse(RISK_ASSESSMENT, EF_SCORE)?,
            risk_factor_score: fields.parse(RISK_ASSESSMENT, RISK_FACTOR_SCORE)?,
        },
        category: fields.get(RISK_ASSESSMENT, RISK_CATEGORY)?.parse()?,
        recommendations,
        timestamp,
    })
}

fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw {
        "Yes" => Some(true),
        "No" => Some(false),
        _ => None,
    }
}

#[derive(Default)]
struct Fields {
    values: HashMap<(&'static str, String), String>,
}

impl Fields {
    fn get(&self, section: &'static str, label: &'static str) -> Result<&str, ReportError> {
        self.values
            .get(&(section, label.to_string()))
            .map(String::as_str)
            .ok_or(ReportError::MissingField { section, label })
    }

    fn parse<T: FromStr>(&self, section: &'static str, label: &'static str) -> Result<T, ReportError> {
        let raw = self.get(section, label)?;
        raw.parse().map_err(|_| ReportError::InvalidValue {
            label,
            value: raw.to_string(),
        })
    }

    fn choice<T>(
        &self,
        section: &'static str,
        label: &'static str,
        read: impl Fn(&str) -> Option<T>,
    ) -> Result<T, ReportError> {
        let raw = self.get(section, label)?;
        read(raw).ok_or_else(|| ReportError::InvalidValue {
            label,
            value: raw.to_string(),
        })
    }
}
