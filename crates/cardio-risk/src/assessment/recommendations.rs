use super::classifier::RiskCategory;
use super::error::ConfigurationError;

pub const RECOMMENDATIONS_PER_CATEGORY: usize = 4;

type Advice = [&'static str; RECOMMENDATIONS_PER_CATEGORY];

const LOW: Advice = [
    "Continue maintaining a healthy lifestyle",
    "Keep up routine check-ups",
    "Monitor blood pressure periodically",
    "Stay physically active",
];

const MODERATE: Advice = [
    "Schedule a follow-up with your healthcare provider",
    "Modify lifestyle risk factors such as diet, exercise, and smoking",
    "Monitor blood pressure regularly",
    "Consider stress management techniques",
];

const HIGH: Advice = [
    "Seek immediate consultation with a healthcare provider",
    "Monitor blood pressure daily",
    "Review medication compliance with your care team",
    "Make urgent lifestyle changes",
];

pub fn recommend(category: RiskCategory) -> &'static Advice {
    match category {
        RiskCategory::Low => &LOW,
        RiskCategory::Moderate => &MODERATE,
        RiskCategory::High => &HIGH,
    }
}

/// Lookup by label, for callers holding a category name rather than the enum.
pub fn recommend_for_label(label: &str) -> Result<&'static Advice, ConfigurationError> {
    let category: RiskCategory = label.parse()?;
    Ok(recommend(category))
}

pub(crate) fn owned(category: RiskCategory) -> Vec<String> {
    recommend(category)
        .iter()
        .map(|item| item.to_string())
        .collect()
}
