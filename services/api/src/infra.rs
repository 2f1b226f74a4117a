use cardio_risk::assessment::report::TIMESTAMP_FORMAT;
use cardio_risk::assessment::ScoringWeights;
use cardio_risk::config::{AppConfig, ConfigError};
use chrono::NaiveDateTime;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Scoring weights from `RISK_WEIGHTS`, or the canonical table when unset.
pub(crate) fn load_weights() -> Result<ScoringWeights, ConfigError> {
    AppConfig::load().map(|config| config.scoring)
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM:SS ({err})"))
}
