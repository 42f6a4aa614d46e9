//! Derived indicators computed from named series
//!
//! Each calculator is a pure function `&SeriesStore -> DerivedIndicator`,
//! independent of the others and composed only from the statistics
//! functions. Calculators always report their raw sub-components alongside
//! the derived value so the output is auditable without re-running the
//! pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::series::{Frequency, SeriesStore};
use super::stats::{percent_change, round2, yoy_change};
use super::status::{classify, IndicatorStatus};

/// Nonfarm business sector real output per hour.
pub const PRODUCTIVITY_SERIES: &str = "OPHNFB";
/// Median usual weekly real earnings.
pub const REAL_WAGE_SERIES: &str = "LES1252881600Q";
/// Unemployment rate, professional & business services.
pub const PROF_BIZ_UNEMPLOYMENT_SERIES: &str = "LNU04032239";
/// Unemployment rate, information industry.
pub const INFO_UNEMPLOYMENT_SERIES: &str = "LNU04032237";
/// Overall unemployment rate, the baseline comparator.
pub const OVERALL_UNEMPLOYMENT_SERIES: &str = "UNRATE";

/// A leaf computed metric with its inputs preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedIndicator {
    pub name: String,
    pub description: String,
    pub value: Option<f64>,
    pub components: BTreeMap<String, Option<f64>>,
    pub status: IndicatorStatus,
}

/// Ghost GDP: productivity rising while real wages stagnate or fall.
///
/// Score = productivity YoY minus real wage YoY, both quarterly. Positive
/// means output is growing faster than it reaches workers. Classification
/// divides the raw spread by 2, a fixed empirical scaling that is part of
/// this indicator's contract, not a classifier knob.
pub fn ghost_gdp(store: &SeriesStore) -> DerivedIndicator {
    let prod_yoy = yoy_change(store.observations(PRODUCTIVITY_SERIES), Frequency::Quarterly);
    let wage_yoy = yoy_change(store.observations(REAL_WAGE_SERIES), Frequency::Quarterly);

    let spread = match (prod_yoy, wage_yoy) {
        (Some(p), Some(w)) => Some(p - w),
        _ => None,
    };

    let mut components = BTreeMap::new();
    components.insert("productivity_yoy_pct".to_string(), prod_yoy.map(round2));
    components.insert("real_wage_yoy_pct".to_string(), wage_yoy.map(round2));

    DerivedIndicator {
        name: "Ghost GDP Score".to_string(),
        description: "Productivity growth minus real wage growth. Positive = output not reaching workers.".to_string(),
        value: spread.map(round2),
        components,
        status: classify(spread.map(|s| s / 2.0), false),
    }
}

/// Displacement Velocity: how fast white-collar unemployment moves relative
/// to the overall rate.
///
/// Average 3-period percent change across the white-collar series, divided
/// by the absolute 3-period change of the overall rate. Members with no
/// signal are skipped; if all are missing, or the baseline change is missing
/// or zero, the indicator is unknown. Classification evaluates
/// `velocity - 1.0`: above 1 means the tracked group is deteriorating
/// faster than the baseline.
pub fn displacement_velocity(store: &SeriesStore) -> DerivedIndicator {
    let prof_change = percent_change(store.observations(PROF_BIZ_UNEMPLOYMENT_SERIES), 3);
    let info_change = percent_change(store.observations(INFO_UNEMPLOYMENT_SERIES), 3);
    let overall_change = percent_change(store.observations(OVERALL_UNEMPLOYMENT_SERIES), 3);

    let white_collar: Vec<f64> = [prof_change, info_change].into_iter().flatten().collect();
    let avg_white_collar = if white_collar.is_empty() {
        None
    } else {
        Some(white_collar.iter().sum::<f64>() / white_collar.len() as f64)
    };

    let velocity = match (avg_white_collar, overall_change) {
        (Some(wc), Some(overall)) if overall != 0.0 => Some(wc / overall.abs()),
        _ => None,
    };

    let mut components = BTreeMap::new();
    components.insert("prof_biz_3mo_change_pct".to_string(), prof_change.map(round2));
    components.insert("info_3mo_change_pct".to_string(), info_change.map(round2));
    components.insert("overall_3mo_change_pct".to_string(), overall_change.map(round2));

    DerivedIndicator {
        name: "Displacement Velocity".to_string(),
        description: "White-collar unemployment change relative to overall. >1 = white-collar deteriorating faster.".to_string(),
        value: velocity.map(round2),
        components,
        status: classify(velocity.map(|v| v - 1.0), false),
    }
}
