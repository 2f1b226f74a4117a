//! Heart failure risk assessment: intake, validation, scoring, and export.
//!
//! Data moves one way through the pipeline and every stage is a pure function of its
//! inputs. [`RiskEngine`] wires the stages together; each stage is also public for
//! callers that need a single step.

pub mod classifier;
pub mod domain;
mod engine;
mod error;
pub mod history;
mod intake;
pub mod metrics;
pub mod recommendations;
pub mod report;
pub mod router;
pub mod scoring;
pub mod validation;

#[cfg(test)]
mod tests;

pub use classifier::{classify, RiskCategory};
pub use domain::{PatientProfile, RiskAssessment, Sex, SmokingStatus};
pub use engine::{AssessmentOutcome, RiskEngine};
pub use error::{AssessmentError, ConfigurationError, InvalidMeasurement};
pub use history::{AssessmentHistory, HistoryEntry, HistoryParameters};
pub use intake::{ClinicalIntake, IntakeError};
pub use metrics::DerivedMetrics;
pub use recommendations::recommend;
pub use report::{Report, ReportError};
pub use router::assessment_router;
pub use scoring::{ComponentScores, ScoreCard, ScoreComponent, ScoreFactor, ScoringEngine, ScoringWeights};
pub use validation::{validate, ValidationResult};
