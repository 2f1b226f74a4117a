use serde::{Deserialize, Serialize};

use super::super::error::ConfigurationError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Weights applied to the five summed components. The table is checked once, when it
/// is built or deserialized, so scoring never re-validates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightTable")]
pub struct ScoringWeights {
    age: f64,
    bmi: f64,
    blood_pressure: f64,
    risk_factors: f64,
    ejection_fraction: f64,
}

impl ScoringWeights {
    pub const fn canonical() -> Self {
        Self {
            age: 0.20,
            bmi: 0.15,
            blood_pressure: 0.15,
            risk_factors: 0.20,
            ejection_fraction: 0.30,
        }
    }

    pub fn new(
        age: f64,
        bmi: f64,
        blood_pressure: f64,
        risk_factors: f64,
        ejection_fraction: f64,
    ) -> Result<Self, ConfigurationError> {
        let candidate = Self {
            age,
            bmi,
            blood_pressure,
            risk_factors,
            ejection_fraction,
        };

        for (name, value) in candidate.named() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidWeight { name, value });
            }
        }

        let sum: f64 = candidate.named().iter().map(|(_, value)| value).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigurationError::WeightSum { sum });
        }

        Ok(candidate)
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn blood_pressure(&self) -> f64 {
        self.blood_pressure
    }

    pub fn risk_factors(&self) -> f64 {
        self.risk_factors
    }

    pub fn ejection_fraction(&self) -> f64 {
        self.ejection_fraction
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("age", self.age),
            ("bmi", self.bmi),
            ("blood_pressure", self.blood_pressure),
            ("risk_factors", self.risk_factors),
            ("ejection_fraction", self.ejection_fraction),
        ]
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::canonical()
    }
}

#[derive(Deserialize)]
struct WeightTable {
    age: f64,
    bmi: f64,
    blood_pressure: f64,
    risk_factors: f64,
    ejection_fraction: f64,
}

impl TryFrom<WeightTable> for ScoringWeights {
    type Error = ConfigurationError;

    fn try_from(table: WeightTable) -> Result<Self, Self::Error> {
        Self::new(
            table.age,
            table.bmi,
            table.blood_pressure,
            table.risk_factors,
            table.ejection_fraction,
        )
    }
}
