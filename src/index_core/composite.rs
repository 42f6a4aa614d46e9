//! Composite index scoring
//!
//! Reduces the per-link severity tiers to a single 0-100 headline number
//! with a fixed interpretation band.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::chain::ChainLinkReport;
use super::stats::round1;
use super::status::IndicatorStatus;

const SCALE: &str = "0-100 (0=all normal, 100=all critical)";

/// The headline figure summarizing the whole chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeIndex {
    pub value: f64,
    pub scale: String,
    pub chain_link_statuses: BTreeMap<IndicatorStatus, usize>,
    pub interpretation: String,
}

/// Numeric weight of a severity tier in the composite average.
///
/// Unknown weighs 0, the same as normal: a link we could not score must
/// never inflate the index.
fn status_weight(status: IndicatorStatus) -> f64 {
    match status {
        IndicatorStatus::Unknown | IndicatorStatus::Normal => 0.0,
        IndicatorStatus::Elevated => 25.0,
        IndicatorStatus::Warning => 50.0,
        IndicatorStatus::Critical => 100.0,
    }
}

fn interpret(score: f64) -> &'static str {
    if score >= 75.0 {
        "Critical: Multiple chain links showing severe stress"
    } else if score >= 50.0 {
        "Warning: Significant stress in the displacement chain"
    } else if score >= 25.0 {
        "Elevated: Early signals present in some chain links"
    } else {
        "Normal: No significant displacement signals detected"
    }
}

/// Average the link tiers into the composite index.
pub fn composite_index(chain_links: &BTreeMap<String, ChainLinkReport>) -> CompositeIndex {
    let weights: Vec<f64> = chain_links
        .values()
        .map(|link| status_weight(link.status))
        .collect();

    let value = if weights.is_empty() {
        0.0
    } else {
        round1(weights.iter().sum::<f64>() / weights.len() as f64)
    };

    let mut chain_link_statuses: BTreeMap<IndicatorStatus, usize> = BTreeMap::new();
    for link in chain_links.values() {
        *chain_link_statuses.entry(link.status).or_insert(0) += 1;
    }

    CompositeIndex {
        value,
        scale: SCALE.to_string(),
        chain_link_statuses,
        interpretation: interpret(value).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(statuses: &[IndicatorStatus]) -> BTreeMap<String, ChainLinkReport> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, &status)| {
                (
                    format!("link_{}", i),
                    ChainLinkReport {
                        name: format!("Link {}", i),
                        status,
                        z_score: None,
                        indicators: BTreeMap::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_composite_single_critical_among_normals() {
        use IndicatorStatus::*;
        let composite = composite_index(&links(&[Normal, Normal, Normal, Normal, Critical]));

        assert_eq!(composite.value, 20.0);
        // 20.0 falls below the 25.0 band boundary.
        assert!(composite.interpretation.starts_with("Normal"));
        assert_eq!(composite.chain_link_statuses[&Normal], 4);
        assert_eq!(composite.chain_link_statuses[&Critical], 1);
    }

    #[test]
    fn test_composite_unknown_weighs_zero() {
        use IndicatorStatus::*;
        let composite = composite_index(&links(&[Unknown, Unknown, Critical]));

        // (0 + 0 + 100) / 3, rounded to one decimal.
        assert_eq!(composite.value, 33.3);
        assert!(composite.interpretation.starts_with("Elevated"));
        assert_eq!(composite.chain_link_statuses[&Unknown], 2);
    }

    #[test]
    fn test_composite_band_boundaries_are_inclusive() {
        use IndicatorStatus::*;
        // All elevated -> exactly 25.0 -> Elevated band, not Normal.
        let composite = composite_index(&links(&[Elevated, Elevated]));
        assert_eq!(composite.value, 25.0);
        assert!(composite.interpretation.starts_with("Elevated"));

        // All warning -> exactly 50.0 -> Warning band.
        let composite = composite_index(&links(&[Warning, Warning]));
        assert_eq!(composite.value, 50.0);
        assert!(composite.interpretation.starts_with("Warning"));

        // Warning/critical mix -> exactly 75.0 -> Critical band.
        let composite = composite_index(&links(&[Warning, Critical, Critical, Warning]));
        assert_eq!(composite.value, 75.0);
        assert!(composite.interpretation.starts_with("Critical"));
    }

    #[test]
    fn test_composite_all_critical() {
        use IndicatorStatus::*;
        let composite = composite_index(&links(&[Critical, Critical]));
        assert_eq!(composite.value, 100.0);
        assert!(composite.interpretation.starts_with("Critical"));
    }

    #[test]
    fn test_composite_no_links() {
        let composite = composite_index(&BTreeMap::new());
        assert_eq!(composite.value, 0.0);
        assert!(composite.interpretation.starts_with("Normal"));
        assert!(composite.chain_link_statuses.is_empty());
    }
}
