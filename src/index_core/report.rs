//! Final report assembly
//!
//! One structured document per run, suitable for direct serialization:
//! best-effort results for everything computable, with unavailability
//! encoded as nulls and `unknown` statuses rather than missing keys.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::chain::{evaluate_chain, ChainLinkReport};
use super::composite::{composite_index, CompositeIndex};
use super::indicators::{displacement_velocity, ghost_gdp, DerivedIndicator};
use super::series::SeriesStore;
use super::stats::DEFAULT_Z_LOOKBACK;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedIndicators {
    pub ghost_gdp: DerivedIndicator,
    pub displacement_velocity: DerivedIndicator,
}

/// The complete output document for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplacementReport {
    pub generated_at: String,
    pub fred_fetched_at: Option<String>,
    pub composite_index: CompositeIndex,
    pub derived_indicators: DerivedIndicators,
    pub chain_links: BTreeMap<String, ChainLinkReport>,
}

/// Run the full compute pass over an already-populated store.
///
/// Pure except for the `generated_at` timestamp: identical stores produce
/// identical reports otherwise.
pub fn build_report(store: &SeriesStore, fred_fetched_at: Option<String>) -> DisplacementReport {
    let chain_links = evaluate_chain(store, DEFAULT_Z_LOOKBACK);
    let composite = composite_index(&chain_links);

    DisplacementReport {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        fred_fetched_at,
        composite_index: composite,
        derived_indicators: DerivedIndicators {
            ghost_gdp: ghost_gdp(store),
            displacement_velocity: displacement_velocity(store),
        },
        chain_links,
    }
}

impl DisplacementReport {
    /// Log the headline numbers the way the fetch progress is logged, so a
    /// run's outcome is readable without opening the output file.
    pub fn log_summary(&self) {
        let ghost = &self.derived_indicators.ghost_gdp;
        log::info!(
            "Ghost GDP Score: {} ({})",
            fmt_value(ghost.value),
            ghost.status.as_str()
        );

        let velocity = &self.derived_indicators.displacement_velocity;
        log::info!(
            "Displacement Velocity: {} ({})",
            fmt_value(velocity.value),
            velocity.status.as_str()
        );

        for link in self.chain_links.values() {
            log::info!(
                "{}: {} (z={})",
                link.name,
                link.status.as_str(),
                fmt_value(link.z_score)
            );
        }

        log::info!(
            "Displacement Index: {}/100 - {}",
            self.composite_index.value,
            self.composite_index.interpretation
        );
    }
}

fn fmt_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| v.to_string())
}
