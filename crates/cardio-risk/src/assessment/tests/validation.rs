use super::common::*;
use crate::assessment::domain::PatientProfile;
use crate::assessment::validation::{
    validate, SYSTOLIC_NOT_ABOVE_DIASTOLIC, UNUSUAL_BMI, UNUSUAL_HEART_RATE,
};
use crate::assessment::AssessmentError;

#[test]
fn baseline_passes_cleanly() {
    let result = validate(&baseline_profile());

    assert!(result.ok);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn equal_pressures_are_a_hard_failure() {
    let result = validate(&PatientProfile {
        systolic_bp: 90,
        diastolic_bp: 90,
        ..baseline_profile()
    });

    assert!(!result.ok);
    assert_eq!(result.errors, vec![SYSTOLIC_NOT_ABOVE_DIASTOLIC]);
}

#[test]
fn bmi_outside_plausible_range_only_warns() {
    let result = validate(&PatientProfile {
        weight_kg: 200.0,
        height_m: 1.5,
        ..baseline_profile()
    });

    assert!(result.ok);
    assert_eq!(result.warnings, vec![UNUSUAL_BMI]);
}

#[test]
fn bmi_range_edges_are_plausible() {
    // 15 and 50 exactly at 2 m
    for weight_kg in [60.0, 200.0] {
        let result = validate(&PatientProfile {
            weight_kg,
            height_m: 2.0,
            ..baseline_profile()
        });
        assert!(result.warnings.is_empty(), "weight {weight_kg} warned");
    }
}

#[test]
fn heart_rate_outside_range_only_warns() {
    for heart_rate in [39, 201] {
        let result = validate(&PatientProfile {
            heart_rate,
            ..baseline_profile()
        });

        assert!(result.ok);
        assert_eq!(result.warnings, vec![UNUSUAL_HEART_RATE]);
    }

    for heart_rate in [40, 200] {
        assert!(validate(&PatientProfile {
            heart_rate,
            ..baseline_profile()
        })
        .warnings
        .is_empty());
    }
}

#[test]
fn non_positive_height_is_a_hard_failure() {
    let result = validate(&PatientProfile {
        height_m: 0.0,
        ..baseline_profile()
    });

    assert!(!result.ok);
    assert!(result.errors[0].contains("Height"));
}

#[test]
fn failing_result_keeps_warnings_in_error() {
    let result = validate(&PatientProfile {
        systolic_bp: 80,
        diastolic_bp: 90,
        heart_rate: 220,
        ..baseline_profile()
    });

    match result.into_result() {
        Err(AssessmentError::InvalidInput { errors, warnings }) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(warnings, vec![UNUSUAL_HEART_RATE]);
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}
