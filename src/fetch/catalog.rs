//! Static catalog of tracked series
//!
//! Every FRED series the pipeline fetches, grouped by the chain link it
//! feeds. The `context` group provides balance and perspective but is not
//! scored. Series metadata here drives fetching and document layout; the
//! scoring direction of each series lives in the chain table
//! (`index_core::chain`).

use crate::index_core::Frequency;

/// Metadata for one tracked series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesMeta {
    pub series_id: &'static str,
    pub name: &'static str,
    pub frequency: Frequency,
    pub unit: &'static str,
    pub note: Option<&'static str>,
}

/// A chain-link group of series in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct CatalogGroup {
    pub chain_link: &'static str,
    pub series: &'static [SeriesMeta],
}

const fn series(
    series_id: &'static str,
    name: &'static str,
    frequency: Frequency,
    unit: &'static str,
) -> SeriesMeta {
    SeriesMeta {
        series_id,
        name,
        frequency,
        unit,
        note: None,
    }
}

const fn noted(
    series_id: &'static str,
    name: &'static str,
    frequency: Frequency,
    unit: &'static str,
    note: &'static str,
) -> SeriesMeta {
    SeriesMeta {
        series_id,
        name,
        frequency,
        unit,
        note: Some(note),
    }
}

/// All FRED series, grouped by chain link.
pub const FRED_CATALOG: &[CatalogGroup] = &[
    CatalogGroup {
        chain_link: "displacement",
        series: &[
            series(
                "LNU04032239",
                "Unemployment Rate: Professional & Business Services",
                Frequency::Monthly,
                "percent",
            ),
            series(
                "LNU04032237",
                "Unemployment Rate: Information Industry",
                Frequency::Monthly,
                "percent",
            ),
            series(
                "CES6054000001",
                "Employees: Professional, Scientific & Technical Services",
                Frequency::Monthly,
                "thousands",
            ),
            noted(
                "UNRATE",
                "Overall Unemployment Rate",
                Frequency::Monthly,
                "percent",
                "Baseline comparator for white-collar vs overall",
            ),
        ],
    },
    CatalogGroup {
        chain_link: "spending",
        series: &[
            series(
                "PCEC96",
                "Real Personal Consumption Expenditures",
                Frequency::Monthly,
                "billions_2017_dollars",
            ),
            series(
                "UMCSENT",
                "Consumer Sentiment (UMich)",
                Frequency::Monthly,
                "index_1966q1_100",
            ),
            series(
                "RSAFS",
                "Advance Retail Sales: Retail and Food Services",
                Frequency::Monthly,
                "millions_dollars",
            ),
        ],
    },
    CatalogGroup {
        chain_link: "ghost_gdp",
        series: &[
            series(
                "OPHNFB",
                "Nonfarm Business Sector: Real Output Per Hour",
                Frequency::Quarterly,
                "index_2017_100",
            ),
            series(
                "LES1252881600Q",
                "Median Usual Weekly Real Earnings",
                Frequency::Quarterly,
                "2025_dollars",
            ),
            series("M2V", "Velocity of M2 Money Stock", Frequency::Quarterly, "ratio"),
        ],
    },
    CatalogGroup {
        chain_link: "credit_stress",
        series: &[
            series(
                "BAMLH0A0HYM2",
                "ICE BofA US High Yield Index OAS",
                Frequency::Daily,
                "percent",
            ),
            series(
                "BAMLH0A3HYC",
                "ICE BofA CCC & Lower US High Yield Index OAS",
                Frequency::Daily,
                "percent",
            ),
            series(
                "DRCLACBS",
                "Delinquency Rate on Consumer Loans",
                Frequency::Quarterly,
                "percent",
            ),
        ],
    },
    CatalogGroup {
        chain_link: "mortgage_stress",
        series: &[series(
            "DRSFRMACBS",
            "Delinquency Rate: Single-Family Residential Mortgages",
            Frequency::Quarterly,
            "percent",
        )],
    },
    CatalogGroup {
        chain_link: "context",
        series: &[
            noted(
                "BABATOTALSAUS",
                "New Business Applications (Total)",
                Frequency::Monthly,
                "applications",
                "Rising = entrepreneurial dynamism. Falling = creative destruction failing.",
            ),
            noted(
                "USCONS",
                "Construction Employment",
                Frequency::Monthly,
                "thousands",
                "AI capex is driving data center construction hiring. Tracks whether AI creates offsetting jobs.",
            ),
            noted(
                "JTSJOL",
                "Job Openings (JOLTS)",
                Frequency::Monthly,
                "thousands",
                "Total labor demand. Falling openings = weakening demand for workers.",
            ),
        ],
    },
];

/// Weekly unemployment-claims series used as the layoff proxy document.
pub const CLAIMS_CATALOG: &[SeriesMeta] = &[
    noted(
        "ICSA",
        "Initial Claims (Unemployment Insurance)",
        Frequency::Weekly,
        "number",
        "Weekly initial jobless claims — best high-frequency proxy for layoffs",
    ),
    noted(
        "CCSA",
        "Continued Claims (Insured Unemployment)",
        Frequency::Weekly,
        "number",
        "People still receiving unemployment insurance",
    ),
];

/// Job-postings sectors relevant to the displacement thesis.
pub const TARGET_SECTORS: &[&str] = &[
    "Software Development",
    "Information Design & Documentation",
    "Mathematics",
    "Banking & Finance",
    "Accounting",
    "Marketing",
    "Media & Communications",
];

/// Total number of FRED series across all groups.
pub fn fred_series_count() -> usize {
    FRED_CATALOG.iter().map(|group| group.series.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index_core::CHAIN_LINKS;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(fred_series_count(), 17);
        assert_eq!(CLAIMS_CATALOG.len(), 2);
    }

    #[test]
    fn test_every_scored_series_is_in_the_catalog() {
        // The chain table and the fetch catalog are maintained separately;
        // a scored series missing from the catalog would silently report
        // unknown forever.
        for link in CHAIN_LINKS {
            let group = FRED_CATALOG
                .iter()
                .find(|g| g.chain_link == link.key)
                .expect("chain link missing from catalog");
            for member in link.members {
                assert!(
                    group.series.iter().any(|s| s.series_id == member.series_id),
                    "series {} not in catalog group {}",
                    member.series_id,
                    link.key
                );
            }
        }
    }
}
