//! Layoff-claims proxy fetcher
//!
//! WARN Act filings have no free API, so weekly unemployment-insurance
//! claims (initial + continued) stand in as the high-frequency layoff
//! signal. This is an optional source: the composite computes without it.

use chrono::{NaiveDate, SecondsFormat, Utc};

use super::catalog::CLAIMS_CATALOG;
use super::documents::ClaimsDocument;
use super::fred::FredClient;

const SOURCE: &str = "FRED (BLS via DOL)";

/// Claims history starts at the pre-pandemic baseline rather than the
/// rolling FRED window, so the z-score lookback sees the 2020 spike.
fn claims_observation_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid constant date")
}

/// Fetch the claims proxy document.
pub async fn fetch_claims(client: &FredClient) -> ClaimsDocument {
    log::info!("Fetching layoff proxy data (initial + continued claims)...");

    let series = client
        .fetch_series_set(CLAIMS_CATALOG, claims_observation_start())
        .await;

    ClaimsDocument {
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        source: SOURCE.to_string(),
        series,
    }
}
