use axum::response::Response;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::assessment::domain::{PatientProfile, Sex, SmokingStatus};
use crate::assessment::{RiskEngine, ScoringWeights};

/// Age 50 male, 70 kg at 1.7 m, 120/80, resting rate 75, EF 55, no comorbidities.
pub(super) fn baseline_profile() -> PatientProfile {
    PatientProfile {
        age: 50,
        sex: Sex::Male,
        weight_kg: 70.0,
        height_m: 1.7,
        systolic_bp: 120,
        diastolic_bp: 80,
        heart_rate: 75,
        ejection_fraction: 55.0,
        bnp_level: 100.0,
        smoking_status: SmokingStatus::Never,
        diabetes: false,
        hypertension: false,
        creatinine: 1.0,
        sodium: 140,
        potassium: 4.0,
        hemoglobin: 14.0,
    }
}

/// Baseline plus every comorbidity and a reduced ejection fraction.
pub(super) fn comorbid_profile() -> PatientProfile {
    PatientProfile {
        smoking_status: SmokingStatus::Current,
        diabetes: true,
        hypertension: true,
        ejection_fraction: 30.0,
        ..baseline_profile()
    }
}

pub(super) fn assessed_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|date| date.and_hms_opt(9, 30, 0))
        .expect("valid timestamp")
}

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new(ScoringWeights::canonical())
}

pub(super) fn age_50_score() -> f64 {
    (50.0 - 18.0) / (120.0 - 18.0) * 25.0
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 payload")
}
