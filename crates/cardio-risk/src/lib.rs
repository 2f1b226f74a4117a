//! Rule-based heart failure risk scoring.
//!
//! The [`assessment`] module holds the engine: intake, validation, derived metrics,
//! weighted scoring, classification, recommendations, and report export. The remaining
//! modules carry the service plumbing shared with the HTTP front end.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
