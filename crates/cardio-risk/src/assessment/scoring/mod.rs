mod config;
pub mod rules;

pub use config::ScoringWeights;

use super::domain::PatientProfile;
use super::metrics::DerivedMetrics;
use serde::{Deserialize, Serialize};

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Stateless scorer that applies a validated weight table to a profile.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn score(&self, profile: &PatientProfile, derived: &DerivedMetrics) -> ScoreCard {
        let components = rules::score_components(profile, derived);
        let total_score = components.weighted_total(&self.weights);

        ScoreCard {
            components,
            total_score,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new(ScoringWeights::canonical())
    }
}

/// Partial scores, each computed independently.
///
/// `heart_rate_score` is reported for display only and never enters the weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub age_score: f64,
    pub bmi_score: f64,
    pub bp_score: f64,
    pub heart_rate_score: f64,
    pub ejection_fraction_score: f64,
    pub risk_factor_score: f64,
}

impl ComponentScores {
    pub fn weighted_total(&self, weights: &ScoringWeights) -> f64 {
        let raw = self.age_score * weights.age()
            + self.bmi_score * weights.bmi()
            + self.bp_score * weights.blood_pressure()
            + self.risk_factor_score * weights.risk_factors()
            + self.ejection_fraction_score * weights.ejection_fraction();

        raw.clamp(MIN_SCORE, MAX_SCORE)
    }

    /// Per-factor audit trail in a fixed order.
    pub fn breakdown(&self, weights: &ScoringWeights) -> Vec<ScoreComponent> {
        let weighted = |factor, score: f64, weight: f64| ScoreComponent {
            factor,
            score,
            weight: Some(weight),
            contribution: score * weight,
        };

        vec![
            weighted(ScoreFactor::Age, self.age_score, weights.age()),
            weighted(ScoreFactor::Bmi, self.bmi_score, weights.bmi()),
            weighted(
                ScoreFactor::BloodPressure,
                self.bp_score,
                weights.blood_pressure(),
            ),
            weighted(
                ScoreFactor::RiskFactors,
                self.risk_factor_score,
                weights.risk_factors(),
            ),
            weighted(
                ScoreFactor::EjectionFraction,
                self.ejection_fraction_score,
                weights.ejection_fraction(),
            ),
            ScoreComponent {
                factor: ScoreFactor::HeartRate,
                score: self.heart_rate_score,
                weight: None,
                contribution: 0.0,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Age,
    Bmi,
    BloodPressure,
    RiskFactors,
    EjectionFraction,
    HeartRate,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Bmi => "BMI",
            Self::BloodPressure => "Blood Pressure",
            Self::RiskFactors => "Risk Factors",
            Self::EjectionFraction => "Ejection Fraction",
            Self::HeartRate => "Heart Rate",
        }
    }
}

/// One line of the score audit. `weight` is `None` for informational components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: f64,
    pub weight: Option<f64>,
    pub contribution: f64,
}

/// Component scores together with the clamped weighted total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub components: ComponentScores,
    pub total_score: f64,
}
