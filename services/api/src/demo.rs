use crate::infra::{load_weights, parse_timestamp};
use cardio_risk::assessment::{
    AssessmentHistory, AssessmentOutcome, ClinicalIntake, PatientProfile, RiskEngine,
};
use cardio_risk::error::AppError;
use chrono::{Local, NaiveDateTime};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AssessArgs {
    /// JSON file with clinical measurements. Omitted fields take the form defaults.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Output format for the generated report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub(crate) format: ReportFormat,
    /// Stamp the report with this time (YYYY-MM-DDTHH:MM:SS). Defaults to now.
    #[arg(long, value_parser = parse_timestamp)]
    pub(crate) at: Option<NaiveDateTime>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs { input, format, at } = args;

    let intake = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<ClinicalIntake>(&raw)?
        }
        None => ClinicalIntake::default(),
    };

    let profile = PatientProfile::try_from(intake)?;
    let engine = RiskEngine::new(load_weights()?);
    let assessed_at = at.unwrap_or_else(|| Local::now().naive_local());
    let outcome = engine.assess(&profile, assessed_at)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    match format {
        ReportFormat::Text => print!("{}", outcome.report.to_text()),
        ReportFormat::Json => println!("{}", outcome.report.to_json()?),
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let engine = RiskEngine::new(load_weights()?);
    let mut history = AssessmentHistory::new();

    println!("Heart failure risk demo");

    for (label, intake) in reference_patients() {
        let profile = PatientProfile::try_from(intake)?;
        let outcome = engine.assess(&profile, Local::now().naive_local())?;
        render_outcome(label, &outcome);
        history.record(&outcome.report);
    }

    println!("\nSession history ({} calculations)", history.len());
    println!(
        "  {:<26} {:>8}  {:<9} {:>4} {:<6} {:>6} {:>8} {:>4}",
        "Timestamp", "Score", "Category", "Age", "Sex", "BMI", "BP", "HR"
    );
    for entry in history.entries() {
        let parameters = &entry.parameters;
        println!(
            "  {:<26} {:>8.2}  {:<9} {:>4} {:<6} {:>6.1} {:>8} {:>4}",
            entry.timestamp,
            entry.risk_score,
            entry.category.label(),
            parameters.age,
            parameters.sex.label(),
            parameters.bmi,
            parameters.blood_pressure,
            parameters.heart_rate
        );
    }

    Ok(())
}

fn render_outcome(label: &str, outcome: &AssessmentOutcome) {
    println!("\n{}", label);
    println!(
        "  Risk score: {:.2} ({})",
        outcome.assessment.total_score,
        outcome.assessment.category.label()
    );
    println!("  BMI: {:.1}", outcome.derived.bmi);
    println!("  Score components:");
    for component in &outcome.breakdown {
        match component.weight {
            Some(weight) => println!(
                "    - {}: {:.2} x {:.2} = {:.3}",
                component.factor.label(),
                component.score,
                weight,
                component.contribution
            ),
            None => println!(
                "    - {}: {:.2} (reported only)",
                component.factor.label(),
                component.score
            ),
        }
    }
    for warning in &outcome.warnings {
        println!("  Warning: {}", warning);
    }
    println!("  Recommendations:");
    for item in &outcome.assessment.recommendations {
        println!("    - {}", item);
    }
}

fn reference_patients() -> Vec<(&'static str, ClinicalIntake)> {
    vec![
        ("Baseline adult", ClinicalIntake::default()),
        (
            "Smoker with diabetes, hypertension and reduced EF",
            ClinicalIntake {
                ejection_fraction: 30.0,
                smoking_status: "Current".to_string(),
                diabetes: "Yes".to_string(),
                hypertension: "Yes".to_string(),
                ..ClinicalIntake::default()
            },
        ),
        (
            "Elderly patient with stage 2 hypertension",
            ClinicalIntake {
                age: 88,
                sex: "Female".to_string(),
                weight_kg: 84.0,
                height_m: 1.6,
                systolic_bp: 168,
                diastolic_bp: 96,
                heart_rate: 104,
                ejection_fraction: 25.0,
                bnp_level: 820.0,
                smoking_status: "Former".to_string(),
                hypertension: "Yes".to_string(),
                ..ClinicalIntake::default()
            },
        ),
    ]
}
