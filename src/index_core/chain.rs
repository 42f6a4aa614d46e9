//! Chain link aggregation
//!
//! The displacement thesis is modeled as five causal links, each backed by
//! one or more series. Link membership and direction are a static
//! configuration table consumed by one generic loop; per-link branching
//! would drift, the table cannot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::series::SeriesStore;
use super::stats::{rolling_z_score, round2};
use super::status::{classify, IndicatorStatus};

/// One series inside a chain link.
///
/// `inverted` marks series where higher values are better (employment
/// levels, sentiment, spending): their z-score is negated before it joins
/// the link average, and their per-series status is classified inverted.
#[derive(Debug, Clone, Copy)]
pub struct LinkMember {
    pub series_id: &'static str,
    pub inverted: bool,
}

/// Static definition of a chain link.
///
/// `inverted` on the link flips the averaged score before classification,
/// for links whose aggregate direction is good-when-low without every
/// member carrying its own flag.
#[derive(Debug, Clone, Copy)]
pub struct LinkSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub inverted: bool,
    pub members: &'static [LinkMember],
}

const fn member(series_id: &'static str, inverted: bool) -> LinkMember {
    LinkMember {
        series_id,
        inverted,
    }
}

/// The five links of the displacement chain.
pub const CHAIN_LINKS: &[LinkSpec] = &[
    LinkSpec {
        key: "displacement",
        name: "White-Collar Displacement",
        inverted: false,
        members: &[
            member("LNU04032239", false),
            member("LNU04032237", false),
            // Employment level: lower = worse.
            member("CES6054000001", true),
        ],
    },
    LinkSpec {
        key: "spending",
        name: "Consumer Spending",
        inverted: false,
        // All of these fall when households pull back.
        members: &[
            member("PCEC96", true),
            member("UMCSENT", true),
            member("RSAFS", true),
        ],
    },
    LinkSpec {
        key: "ghost_gdp",
        name: "Ghost GDP",
        inverted: false,
        // Declining money velocity is the stress signal.
        members: &[member("M2V", true)],
    },
    LinkSpec {
        key: "credit_stress",
        name: "Credit Stress",
        inverted: false,
        members: &[
            member("BAMLH0A0HYM2", false),
            member("BAMLH0A3HYC", false),
            member("DRCLACBS", false),
        ],
    },
    LinkSpec {
        key: "mortgage_stress",
        name: "Mortgage & Housing Stress",
        inverted: false,
        members: &[member("DRSFRMACBS", false)],
    },
];

/// Per-series score and status inside a link's breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesScore {
    pub z: Option<f64>,
    pub status: IndicatorStatus,
}

/// Aggregated result for one chain link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainLinkReport {
    pub name: String,
    pub status: IndicatorStatus,
    pub z_score: Option<f64>,
    pub indicators: BTreeMap<String, SeriesScore>,
}

/// Evaluate a single link against the store.
///
/// Every member's sub-score is preserved in the breakdown, including
/// members with no data (recorded as `{z: None, status: unknown}`), even
/// though only the aggregate drives the link status. With zero scoreable
/// members the link itself is unknown.
pub fn evaluate_link(store: &SeriesStore, spec: &LinkSpec, lookback: usize) -> ChainLinkReport {
    let mut contributions = Vec::with_capacity(spec.members.len());
    let mut indicators = BTreeMap::new();

    for member in spec.members {
        let z = rolling_z_score(store.observations(member.series_id), lookback);
        if let Some(z) = z {
            contributions.push(if member.inverted { -z } else { z });
        }
        indicators.insert(
            member.series_id.to_string(),
            SeriesScore {
                z: z.map(round2),
                status: classify(z, member.inverted),
            },
        );
    }

    let mut average = if contributions.is_empty() {
        None
    } else {
        Some(contributions.iter().sum::<f64>() / contributions.len() as f64)
    };
    if spec.inverted {
        average = average.map(|a| -a);
    }

    ChainLinkReport {
        name: spec.name.to_string(),
        status: classify(average, false),
        z_score: average.map(round2),
        indicators,
    }
}

/// Evaluate every configured link, keyed by link id.
pub fn evaluate_chain(store: &SeriesStore, lookback: usize) -> BTreeMap<String, ChainLinkReport> {
    CHAIN_LINKS
        .iter()
        .map(|spec| (spec.key.to_string(), evaluate_link(store, spec, lookback)))
        .collect()
}
