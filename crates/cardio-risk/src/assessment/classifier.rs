use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigurationError;

pub const MODERATE_THRESHOLD: f64 = 20.0;
pub const HIGH_THRESHOLD: f64 = 50.0;

/// Ordered risk buckets, lowest severity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskCategory {
    type Err = ConfigurationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigurationError::UnknownCategory(raw.to_string()))
    }
}

/// Lower bounds are inclusive: 20 is Moderate and 50 is High.
pub fn classify(total_score: f64) -> RiskCategory {
    if total_score >= HIGH_THRESHOLD {
        RiskCategory::High
    } else if total_score >= MODERATE_THRESHOLD {
        RiskCategory::Moderate
    } else {
        RiskCategory::Low
    }
}
