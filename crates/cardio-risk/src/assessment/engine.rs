use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::{debug, warn};

use super::classifier::classify;
use super::domain::{PatientProfile, RiskAssessment};
use super::error::AssessmentError;
use super::metrics::DerivedMetrics;
use super::recommendations;
use super::report::{self, Report};
use super::scoring::{ComponentScores, ScoreComponent, ScoringEngine, ScoringWeights};
use super::validation::validate;

/// Runs the full pipeline: validate, derive, score, classify, recommend, report.
///
/// Holds only the weight table, so one instance can be shared across requests.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    scoring: ScoringEngine,
}

impl RiskEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            scoring: ScoringEngine::new(weights),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        self.scoring.weights()
    }

    /// Scores `profile`, stamping the result with `assessed_at`.
    ///
    /// Validator warnings ride along on the outcome; only hard failures abort.
    pub fn assess(
        &self,
        profile: &PatientProfile,
        assessed_at: NaiveDateTime,
    ) -> Result<AssessmentOutcome, AssessmentError> {
        let warnings = validate(profile).into_result()?;
        for message in &warnings {
            warn!(warning = %message, "assessment input flagged");
        }

        let derived = DerivedMetrics::from_profile(profile)?;
        let card = self.scoring.score(profile, &derived);
        let category = classify(card.total_score);

        let assessment = RiskAssessment {
            total_score: card.total_score,
            category,
            recommendations: recommendations::owned(category),
            assessed_at,
        };
        let report = report::build(profile, &derived, &card.components, &assessment);

        debug!(
            total_score = assessment.total_score,
            category = %category,
            bmi = derived.bmi,
            "risk assessment computed"
        );

        Ok(AssessmentOutcome {
            derived,
            scores: card.components,
            breakdown: card.components.breakdown(self.weights()),
            assessment,
            warnings,
            report,
        })
    }
}

/// Everything one assessment produces, for display or export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub derived: DerivedMetrics,
    pub scores: ComponentScores,
    pub breakdown: Vec<ScoreComponent>,
    pub assessment: RiskAssessment,
    pub warnings: Vec<String>,
    pub report: Report,
}
