use super::common::*;
use crate::assessment::domain::{PatientProfile, SmokingStatus};
use crate::assessment::metrics::DerivedMetrics;
use crate::assessment::recommendations::RECOMMENDATIONS_PER_CATEGORY;
use crate::assessment::{
    recommend, AssessmentError, RiskCategory, ScoreFactor, ScoringEngine,
};

#[test]
fn baseline_profile_scores_low() {
    let outcome = engine()
        .assess(&baseline_profile(), assessed_at())
        .expect("baseline is valid");

    assert!((outcome.derived.bmi - 24.22).abs() < 0.01);
    assert_eq!(outcome.scores.age_score, age_50_score());
    assert_eq!(outcome.scores.bmi_score, 0.0);
    assert_eq!(
        outcome.scores.bp_score, 10.0,
        "diastolic 80 sits in the elevated tier"
    );
    assert_eq!(outcome.scores.risk_factor_score, 0.0);
    assert_eq!(outcome.scores.ejection_fraction_score, 0.0);

    let expected = age_50_score() * 0.20 + 10.0 * 0.15;
    assert!((outcome.assessment.total_score - expected).abs() < 1e-12);
    assert!((outcome.assessment.total_score - 3.0686).abs() < 1e-4);
    assert_eq!(outcome.assessment.category, RiskCategory::Low);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn comorbidities_alone_stay_low() {
    let outcome = engine()
        .assess(&comorbid_profile(), assessed_at())
        .expect("comorbid profile is valid");

    assert_eq!(outcome.scores.risk_factor_score, 35.0);
    assert_eq!(outcome.scores.ejection_fraction_score, 12.5);

    let expected = age_50_score() * 0.20 + 10.0 * 0.15 + 35.0 * 0.20 + 12.5 * 0.30;
    assert!((outcome.assessment.total_score - expected).abs() < 1e-12);
    assert!((outcome.assessment.total_score - 13.8186).abs() < 1e-4);
    assert_eq!(
        outcome.assessment.category,
        RiskCategory::Low,
        "risk factors and EF without age or BP pressure remain low"
    );
}

#[test]
fn elderly_hypertensive_profile_reaches_moderate() {
    let profile = PatientProfile {
        age: 120,
        weight_kg: 100.0,
        systolic_bp: 185,
        diastolic_bp: 100,
        ejection_fraction: 10.0,
        ..comorbid_profile()
    };

    let outcome = engine().assess(&profile, assessed_at()).expect("valid");

    assert_eq!(outcome.scores.age_score, 25.0);
    assert_eq!(outcome.scores.bmi_score, 20.0);
    assert_eq!(outcome.scores.bp_score, 25.0);
    assert!((outcome.assessment.total_score - 25.5).abs() < 1e-9);
    assert_eq!(outcome.assessment.category, RiskCategory::Moderate);
    assert_eq!(
        outcome.assessment.recommendations,
        recommend(RiskCategory::Moderate).to_vec()
    );
}

#[test]
fn heart_rate_is_reported_but_not_weighted() {
    let resting = engine()
        .assess(&baseline_profile(), assessed_at())
        .expect("valid");
    let racing = engine()
        .assess(
            &PatientProfile {
                heart_rate: 135,
                ..baseline_profile()
            },
            assessed_at(),
        )
        .expect("valid");

    assert_eq!(racing.scores.heart_rate_score, 30.0);
    assert_eq!(
        racing.assessment.total_score.to_bits(),
        resting.assessment.total_score.to_bits()
    );

    let heart_rate = racing
        .breakdown
        .iter()
        .find(|component| component.factor == ScoreFactor::HeartRate)
        .expect("heart rate listed");
    assert_eq!(heart_rate.weight, None);
    assert_eq!(heart_rate.contribution, 0.0);
}

#[test]
fn breakdown_contributions_sum_to_total() {
    let outcome = engine()
        .assess(&comorbid_profile(), assessed_at())
        .expect("valid");

    let sum: f64 = outcome
        .breakdown
        .iter()
        .map(|component| component.contribution)
        .sum();
    assert!((sum - outcome.assessment.total_score).abs() < 1e-9);
    assert_eq!(outcome.breakdown.len(), 6);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let engine = engine();
    let profile = comorbid_profile();

    let first = engine.assess(&profile, assessed_at()).expect("valid");
    let second = engine.assess(&profile, assessed_at()).expect("valid");

    assert_eq!(first.scores, second.scores);
    assert_eq!(
        first.assessment.total_score.to_bits(),
        second.assessment.total_score.to_bits()
    );
    assert_eq!(first.assessment.category, second.assessment.category);
    assert_eq!(first.report, second.report);
}

#[test]
fn total_score_stays_within_bounds_across_the_input_domain() {
    let scorer = ScoringEngine::default();

    for age in [18u8, 40, 65, 90, 120] {
        for (weight_kg, height_m) in [(30.0, 2.5), (70.0, 1.7), (200.0, 1.0)] {
            for (systolic_bp, diastolic_bp) in [(90u16, 60u16), (135, 85), (250, 150)] {
                for ejection_fraction in [10.0, 35.0, 55.0, 80.0] {
                    for smoking_status in [
                        SmokingStatus::Never,
                        SmokingStatus::Former,
                        SmokingStatus::Current,
                    ] {
                        let profile = PatientProfile {
                            age,
                            weight_kg,
                            height_m,
                            systolic_bp,
                            diastolic_bp,
                            ejection_fraction,
                            smoking_status,
                            diabetes: true,
                            hypertension: true,
                            ..baseline_profile()
                        };
                        let derived = DerivedMetrics::from_profile(&profile).expect("valid");
                        let card = scorer.score(&profile, &derived);

                        assert!(
                            (0.0..=100.0).contains(&card.total_score),
                            "score {} escaped bounds for {profile:?}",
                            card.total_score
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn raising_ejection_fraction_never_raises_its_score() {
    let scorer = ScoringEngine::default();
    let mut previous = f64::INFINITY;

    for tenths in 100..=800 {
        let profile = PatientProfile {
            ejection_fraction: f64::from(tenths) / 10.0,
            ..baseline_profile()
        };
        let derived = DerivedMetrics::from_profile(&profile).expect("valid");
        let score = scorer.score(&profile, &derived).components.ejection_fraction_score;

        assert!(score <= previous, "EF score rose at {}", profile.ejection_fraction);
        previous = score;
    }
}

#[test]
fn systolic_not_above_diastolic_blocks_scoring() {
    let profile = PatientProfile {
        systolic_bp: 80,
        diastolic_bp: 90,
        ..baseline_profile()
    };

    match engine().assess(&profile, assessed_at()) {
        Err(AssessmentError::InvalidInput { errors, .. }) => {
            assert_eq!(errors, vec!["Systolic BP must be greater than Diastolic BP"]);
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn warnings_do_not_block_scoring() {
    let profile = PatientProfile {
        weight_kg: 30.0,
        height_m: 2.0,
        heart_rate: 210,
        ..baseline_profile()
    };

    let outcome = engine().assess(&profile, assessed_at()).expect("warnings only");

    assert_eq!(outcome.warnings.len(), 2);
    assert_eq!(outcome.scores.bmi_score, 15.0);
}

#[test]
fn recommendations_depend_only_on_category() {
    let low = engine()
        .assess(&baseline_profile(), assessed_at())
        .expect("valid");
    let also_low = engine()
        .assess(&comorbid_profile(), assessed_at())
        .expect("valid");

    assert_eq!(low.assessment.recommendations.len(), RECOMMENDATIONS_PER_CATEGORY);
    assert_eq!(
        low.assessment.recommendations,
        also_low.assessment.recommendations
    );
}
