//! Severity classification of deviation scores

use serde::{Deserialize, Serialize};

/// Discrete severity tier for an indicator or chain link.
///
/// Ordered by severity: `Unknown < Normal < Elevated < Warning < Critical`.
/// `Unknown` means no score could be computed (insufficient data), which is
/// distinct from `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Unknown,
    Normal,
    Elevated,
    Warning,
    Critical,
}

impl IndicatorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorStatus::Unknown => "unknown",
            IndicatorStatus::Normal => "normal",
            IndicatorStatus::Elevated => "elevated",
            IndicatorStatus::Warning => "warning",
            IndicatorStatus::Critical => "critical",
        }
    }
}

/// Classify a deviation score into a severity tier.
///
/// `inverted = true` means higher raw values are BETTER (consumer sentiment,
/// employment level): the score is negated before the thresholds apply, so
/// rising values map to lower stress.
///
/// Thresholds are fixed in standard-deviation units. Callers that need a
/// domain-specific scale rescale the score before calling; the thresholds
/// themselves are never reinterpreted per indicator.
pub fn classify(score: Option<f64>, inverted: bool) -> IndicatorStatus {
    let Some(score) = score else {
        return IndicatorStatus::Unknown;
    };

    let score = if inverted { -score } else { score };

    if score >= 2.0 {
        IndicatorStatus::Critical
    } else if score >= 1.0 {
        IndicatorStatus::Warning
    } else if score >= 0.5 {
        IndicatorStatus::Elevated
    } else {
        IndicatorStatus::Normal
    }
}
