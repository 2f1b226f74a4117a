/// Failure raised by the scoring pipeline. No partial score accompanies either variant.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    /// A hard precondition failed; the validator's findings are carried along.
    #[error("invalid input: {}", .errors.join("; "))]
    InvalidInput {
        errors: Vec<String>,
        warnings: Vec<String>,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl AssessmentError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            errors: vec![message.into()],
            warnings: Vec::new(),
        }
    }
}

/// Programming defects in the scoring setup. These surface at construction or lookup
/// time and are never treated as user errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("scoring weights must sum to 1.0 (got {sum})")]
    WeightSum { sum: f64 },
    #[error("scoring weight '{name}' must be finite and non-negative (got {value})")]
    InvalidWeight { name: &'static str, value: f64 },
    #[error("unrecognized risk category '{0}'")]
    UnknownCategory(String),
}

/// Rejected measurement while deriving metrics.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidMeasurement {
    #[error("Height must be greater than zero (got {0} m)")]
    NonPositiveHeight(f64),
    #[error("Weight must be greater than zero (got {0} kg)")]
    NonPositiveWeight(f64),
}

impl From<InvalidMeasurement> for AssessmentError {
    fn from(value: InvalidMeasurement) -> Self {
        Self::invalid(value.to_string())
    }
}
