use super::common::*;
use chrono::Timelike;
use crate::assessment::domain::{PatientProfile, Sex, SmokingStatus};
use crate::assessment::report::{ReportError, SECTIONS};
use crate::assessment::{AssessmentHistory, Report, RiskCategory};

fn sample_report() -> Report {
    let profile = PatientProfile {
        sex: Sex::Female,
        smoking_status: SmokingStatus::Former,
        potassium: 4.35,
        creatinine: 1.15,
        hemoglobin: 12.7,
        ..comorbid_profile()
    };

    engine()
        .assess(&profile, assessed_at())
        .expect("valid profile")
        .report
}

#[test]
fn report_groups_carry_every_profile_field() {
    let profile = comorbid_profile();
    let outcome = engine().assess(&profile, assessed_at()).expect("valid");

    assert_eq!(outcome.report.patient_profile(), profile);
    assert_eq!(outcome.report.demographics.bmi, outcome.derived.bmi);
    assert_eq!(outcome.report.risk_score, outcome.assessment.total_score);
    assert_eq!(outcome.report.component_scores, outcome.scores);
    assert_eq!(outcome.report.timestamp, "2025-03-14T09:30:00");
    assert_eq!(
        outcome.report.assessment().expect("timestamp parses"),
        outcome.assessment
    );
}

#[test]
fn json_rendering_reloads_without_loss() {
    let report = sample_report();

    let json = report.to_json().expect("serializes");
    let reloaded = Report::from_json(&json).expect("parses");

    assert_eq!(reloaded, report);
    assert!(json.contains("\"laboratory_values\""));
    assert!(json.contains("\"vital_signs\""));
}

#[test]
fn json_rendering_reloads_without_loss_across_the_input_domain() {
    let engine = engine();
    let mut checked = 0;

    for age in [18u8, 33, 50, 67, 89, 120] {
        for step in 0..=170 {
            let weight_kg = 30.037 + f64::from(step);
            for height_m in [1.41, 1.5, 1.62, 1.7, 1.83, 1.95, 2.07] {
                let profile = PatientProfile {
                    age,
                    weight_kg,
                    height_m,
                    ..comorbid_profile()
                };
                let report = engine.assess(&profile, assessed_at()).expect("valid").report;

                let json = report.to_json().expect("serializes");
                let reloaded = Report::from_json(&json).expect("parses");
                assert_eq!(reloaded, report, "json drifted for {profile:?}");

                let reloaded = Report::from_text(&report.to_text()).expect("parses");
                assert_eq!(reloaded, report, "text drifted for {profile:?}");
                checked += 1;
            }
        }
    }

    assert_eq!(checked, 6 * 171 * 7);
}

#[test]
fn default_patient_age_score_survives_json_bit_for_bit() {
    let report = engine()
        .assess(&baseline_profile(), assessed_at())
        .expect("valid")
        .report;

    let reloaded = Report::from_json(&report.to_json().expect("serializes")).expect("parses");

    assert_eq!(
        reloaded.component_scores.age_score.to_bits(),
        age_50_score().to_bits()
    );
}

#[test]
fn text_rendering_reloads_without_loss() {
    let report = sample_report();

    let text = report.to_text();
    let reloaded = Report::from_text(&text).expect("parses");

    assert_eq!(reloaded, report);
    assert_eq!(
        reloaded.laboratory_values.potassium.to_bits(),
        4.35f64.to_bits()
    );
}

#[test]
fn text_rendering_lists_sections_in_order() {
    let text = sample_report().to_text();

    let positions: Vec<usize> = SECTIONS
        .iter()
        .map(|section| {
            text.lines()
                .position(|line| line == *section)
                .unwrap_or_else(|| panic!("section {section} missing"))
        })
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.contains("Risk Category: Low"));
    assert!(text.contains("Smoking Status: Former"));
    assert!(text.contains("Diabetes: Yes"));
    assert_eq!(text.lines().filter(|line| line.starts_with("- ")).count(), 4);
}

#[test]
fn sub_second_timestamps_survive_both_renderings() {
    let assessed_at = assessed_at()
        .with_nanosecond(125_000_000)
        .expect("valid nanos");
    let outcome = engine()
        .assess(&baseline_profile(), assessed_at)
        .expect("valid");

    let from_text = Report::from_text(&outcome.report.to_text()).expect("parses");
    let from_json =
        Report::from_json(&outcome.report.to_json().expect("serializes")).expect("parses");

    assert_eq!(
        from_text.assessment().expect("parses").assessed_at,
        assessed_at
    );
    assert_eq!(
        from_json.assessment().expect("parses").assessed_at,
        assessed_at
    );
}

#[test]
fn text_missing_a_field_is_rejected() {
    let text = sample_report().to_text();
    let truncated: String = text
        .lines()
        .filter(|line| !line.starts_with("Sodium"))
        .map(|line| format!("{line}\n"))
        .collect();

    match Report::from_text(&truncated) {
        Err(ReportError::MissingField { section, label }) => {
            assert_eq!(section, "LABORATORY VALUES");
            assert!(label.starts_with("Sodium"));
        }
        other => panic!("expected missing field, got {other:?}"),
    }
}

#[test]
fn text_with_unknown_category_is_rejected() {
    let text = sample_report()
        .to_text()
        .replace("Risk Category: Low", "Risk Category: Severe");

    assert!(matches!(
        Report::from_text(&text),
        Err(ReportError::Category(_))
    ));
}

#[test]
fn clinical_parameters_follow_chart_order() {
    let report = sample_report();
    let labels: Vec<&str> = report
        .clinical_parameters()
        .iter()
        .map(|(label, _)| *label)
        .collect();

    assert_eq!(
        labels,
        vec!["Age", "BMI", "Systolic BP", "Diastolic BP", "Heart Rate"]
    );
}

#[test]
fn history_appends_in_order() {
    let mut history = AssessmentHistory::new();
    assert!(history.is_empty());

    let first = engine()
        .assess(&baseline_profile(), assessed_at())
        .expect("valid")
        .report;
    let second = sample_report();

    history.record(&first);
    let latest = history.record(&second).clone();

    assert_eq!(history.len(), 2);
    assert_eq!(history.entries()[0].risk_score, first.risk_score);
    assert_eq!(history.entries()[0].parameters.blood_pressure, "120/80");
    assert_eq!(latest.category, RiskCategory::Low);
    assert_eq!(history.latest(), Some(&latest));
}
