//! End-to-end pipeline tests over synthetic documents
//!
//! Exercises the document → store → report path the compute binaries run:
//! raw JSON round-trips, derived indicator and chain link scenarios with
//! hand-computable numbers, and run-to-run determinism of the output.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use displacement_index::fetch::{load_json, save_json, ClaimsDocument, FredDocument, SeriesRecord};
use displacement_index::index_core::{
    build_report, Frequency, IndicatorStatus, Observation, SeriesStore,
};

/// [4,4,4,4,9]: rolling z = 2.0 exactly, 3-period change = +125%.
const SPIKE: &[f64] = &[4.0, 4.0, 4.0, 4.0, 9.0];
/// Constant: rolling z = 0.0 exactly, 3-period change = 0%.
const FLAT: &[f64] = &[4.0, 4.0, 4.0, 4.0, 4.0];
/// [4,4,4,4,5]: 3-period change = +25%.
const DRIFT: &[f64] = &[4.0, 4.0, 4.0, 4.0, 5.0];

fn observations(values: &[f64]) -> Vec<Observation> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            Observation::new(
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(i as i64),
                v,
            )
        })
        .collect()
}

fn record(series_id: &str, frequency: Frequency, values: &[f64]) -> SeriesRecord {
    let observations = observations(values);
    SeriesRecord {
        series_id: Some(series_id.to_string()),
        name: format!("Synthetic {}", series_id),
        frequency,
        unit: "percent".to_string(),
        note: None,
        latest: observations.last().copied(),
        count: observations.len(),
        observations,
    }
}

/// A FRED document with hand-computable numbers for every scored series
/// except BAMLH0A3HYC and DRSFRMACBS, which are deliberately absent.
fn synthetic_fred_document() -> FredDocument {
    let mut chain_links: BTreeMap<String, BTreeMap<String, SeriesRecord>> = BTreeMap::new();

    let displacement = [
        record("LNU04032239", Frequency::Monthly, SPIKE),
        record("LNU04032237", Frequency::Monthly, SPIKE),
        record("CES6054000001", Frequency::Monthly, FLAT),
        record("UNRATE", Frequency::Monthly, DRIFT),
    ];
    let spending = [
        record("PCEC96", Frequency::Monthly, SPIKE),
        record("UMCSENT", Frequency::Monthly, FLAT),
        record("RSAFS", Frequency::Monthly, FLAT),
    ];
    let ghost_gdp = [
        record("OPHNFB", Frequency::Quarterly, &[100.0, 1.0, 1.0, 1.0, 103.0]),
        record(
            "LES1252881600Q",
            Frequency::Quarterly,
            &[100.0, 1.0, 1.0, 1.0, 101.0],
        ),
        record("M2V", Frequency::Quarterly, SPIKE),
    ];
    let credit_stress = [
        record("BAMLH0A0HYM2", Frequency::Daily, SPIKE),
        record("DRCLACBS", Frequency::Quarterly, FLAT),
    ];

    for (link, records) in [
        ("displacement", &displacement[..]),
        ("spending", &spending[..]),
        ("ghost_gdp", &ghost_gdp[..]),
        ("credit_stress", &credit_stress[..]),
        ("mortgage_stress", &[][..]),
    ] {
        let map = records
            .iter()
            .map(|r| (r.series_id.clone().unwrap(), r.clone()))
            .collect();
        chain_links.insert(link.to_string(), map);
    }

    FredDocument {
        fetched_at: "2026-08-01T00:00:00Z".to_string(),
        chain_links,
    }
}

fn store_from(doc: &FredDocument) -> SeriesStore {
    let mut store = SeriesStore::new();
    doc.populate(&mut store);
    store
}

#[test]
fn test_full_pipeline_over_synthetic_documents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fred_raw.json");

    // Round-trip through disk exactly as compute_index does.
    save_json(&synthetic_fred_document(), &path).unwrap();
    let fred: FredDocument = load_json(&path).unwrap();

    let store = store_from(&fred);
    let report = build_report(&store, Some(fred.fetched_at.clone()));

    assert_eq!(report.fred_fetched_at.as_deref(), Some("2026-08-01T00:00:00Z"));

    // Ghost GDP: productivity +3.0% YoY vs wages +1.0% -> spread 2.0,
    // classified at 2.0/2 = 1.0 -> warning.
    let ghost = &report.derived_indicators.ghost_gdp;
    assert_eq!(ghost.value, Some(2.0));
    assert_eq!(ghost.components["productivity_yoy_pct"], Some(3.0));
    assert_eq!(ghost.components["real_wage_yoy_pct"], Some(1.0));
    assert_eq!(ghost.status, IndicatorStatus::Warning);

    // Velocity: white-collar average +125% vs baseline +25% -> 5.0,
    // classified at 5.0 - 1.0 = 4.0 -> critical.
    let velocity = &report.derived_indicators.displacement_velocity;
    assert_eq!(velocity.value, Some(5.0));
    assert_eq!(velocity.components["prof_biz_3mo_change_pct"], Some(125.0));
    assert_eq!(velocity.components["overall_3mo_change_pct"], Some(25.0));
    assert_eq!(velocity.status, IndicatorStatus::Critical);

    // Displacement link: z-scores [2.0, 2.0, -0.0 (inverted flat)] -> 1.33.
    let displacement = &report.chain_links["displacement"];
    assert_eq!(displacement.z_score, Some(1.33));
    assert_eq!(displacement.status, IndicatorStatus::Warning);
    assert_eq!(
        displacement.indicators["LNU04032239"].status,
        IndicatorStatus::Critical
    );
    // Employment spike would be benign; a flat level is simply normal.
    assert_eq!(
        displacement.indicators["CES6054000001"].status,
        IndicatorStatus::Normal
    );

    // Spending link: all members inverted, only PCEC96 moves (+2 z) ->
    // average -0.67, which is calm, not stress.
    let spending = &report.chain_links["spending"];
    assert_eq!(spending.z_score, Some(-0.67));
    assert_eq!(spending.status, IndicatorStatus::Normal);

    // Ghost GDP link: rising money velocity is benign under inversion.
    let ghost_link = &report.chain_links["ghost_gdp"];
    assert_eq!(ghost_link.z_score, Some(-2.0));
    assert_eq!(ghost_link.status, IndicatorStatus::Normal);

    // Credit link: [2.0, missing, 0.0] -> the present pair averages to 1.0
    // and the missing member stays in the breakdown as unknown.
    let credit = &report.chain_links["credit_stress"];
    assert_eq!(credit.z_score, Some(1.0));
    assert_eq!(credit.status, IndicatorStatus::Warning);
    assert_eq!(credit.indicators["BAMLH0A3HYC"].z, None);
    assert_eq!(
        credit.indicators["BAMLH0A3HYC"].status,
        IndicatorStatus::Unknown
    );

    // Mortgage link has no data at all.
    let mortgage = &report.chain_links["mortgage_stress"];
    assert_eq!(mortgage.z_score, None);
    assert_eq!(mortgage.status, IndicatorStatus::Unknown);

    // Composite: [warning, normal, normal, warning, unknown] ->
    // (50+0+0+50+0)/5 = 20.0, below the 25.0 elevated band.
    let composite = &report.composite_index;
    assert_eq!(composite.value, 20.0);
    assert!(composite.interpretation.starts_with("Normal"));
    assert_eq!(composite.chain_link_statuses[&IndicatorStatus::Warning], 2);
    assert_eq!(composite.chain_link_statuses[&IndicatorStatus::Normal], 2);
    assert_eq!(composite.chain_link_statuses[&IndicatorStatus::Unknown], 1);
}

#[test]
fn test_pipeline_is_deterministic_apart_from_timestamp() {
    let fred = synthetic_fred_document();
    let store = store_from(&fred);

    let mut first = build_report(&store, Some(fred.fetched_at.clone()));
    let mut second = build_report(&store, Some(fred.fetched_at.clone()));

    first.generated_at = "2026-08-05T00:00:00Z".to_string();
    second.generated_at = "2026-08-05T00:00:00Z".to_string();

    let first_json = serde_json::to_string_pretty(&first).unwrap();
    let second_json = serde_json::to_string_pretty(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn test_optional_claims_document_enriches_the_store() {
    let fred = synthetic_fred_document();
    let claims = ClaimsDocument {
        fetched_at: "2026-08-01T00:00:00Z".to_string(),
        source: "FRED (BLS via DOL)".to_string(),
        series: BTreeMap::from([(
            "ICSA".to_string(),
            record("ICSA", Frequency::Weekly, DRIFT),
        )]),
    };

    let mut store = store_from(&fred);
    claims.populate(&mut store);

    assert_eq!(store.observations("ICSA").len(), DRIFT.len());

    // Claims series feed no scored link, so the report is unchanged by
    // their presence.
    let with_claims = build_report(&store, None);
    let without_claims = build_report(&store_from(&fred), None);
    assert_eq!(
        with_claims.composite_index.value,
        without_claims.composite_index.value
    );
    assert_eq!(
        serde_json::to_value(&with_claims.chain_links).unwrap(),
        serde_json::to_value(&without_claims.chain_links).unwrap()
    );
}

#[test]
fn test_missing_primary_series_degrade_to_unknown() {
    // A store missing the wage series: Ghost GDP must be unknown while the
    // rest of the report still computes.
    let mut fred = synthetic_fred_document();
    fred.chain_links
        .get_mut("ghost_gdp")
        .unwrap()
        .remove("LES1252881600Q");

    let report = build_report(&store_from(&fred), None);

    let ghost = &report.derived_indicators.ghost_gdp;
    assert_eq!(ghost.value, None);
    assert_eq!(ghost.status, IndicatorStatus::Unknown);
    assert_eq!(ghost.components["productivity_yoy_pct"], Some(3.0));
    assert_eq!(ghost.components["real_wage_yoy_pct"], None);

    // Unrelated links are untouched.
    assert_eq!(
        report.chain_links["displacement"].status,
        IndicatorStatus::Warning
    );
}
