use serde::{Deserialize, Serialize};

use super::classifier::RiskCategory;
use super::domain::Sex;
use super::report::Report;

/// Headline parameters kept for each past calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryParameters {
    pub age: u8,
    pub sex: Sex,
    pub bmi: f64,
    pub blood_pressure: String,
    pub heart_rate: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub risk_score: f64,
    pub category: RiskCategory,
    pub parameters: HistoryParameters,
}

impl HistoryEntry {
    pub fn from_report(report: &Report) -> Self {
        Self {
            timestamp: report.timestamp.clone(),
            risk_score: report.risk_score,
            category: report.category,
            parameters: HistoryParameters {
                age: report.demographics.age,
                sex: report.demographics.sex,
                bmi: report.demographics.bmi,
                blood_pressure: report.patient_profile().blood_pressure_label(),
                heart_rate: report.vital_signs.heart_rate,
            },
        }
    }
}

/// Append-only log of past calculations, owned by the caller for one session.
///
/// The engine never holds one of these; callers pass reports in after scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentHistory {
    entries: Vec<HistoryEntry>,
}

impl AssessmentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: &Report) -> &HistoryEntry {
        self.entries.push(HistoryEntry::from_report(report));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
