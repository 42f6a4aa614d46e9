//! FRED API client
//!
//! Fetches observation series from the St. Louis Fed API. One failed series
//! never fails a whole run: the catalog fetch logs the error and records an
//! empty series, and the compute pass reports it as unknown downstream.
//!
//! Endpoint: https://api.stlouisfed.org/fred/series/observations
//! Register a free key at: https://fredaccount.stlouisfed.org/apikeys

use chrono::{Duration as ChronoDuration, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use super::catalog::{fred_series_count, SeriesMeta, FRED_CATALOG};
use super::documents::{FredDocument, SeriesRecord};
use super::error::FetchError;
use crate::config::Config;
use crate::index_core::Observation;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";
const USER_AGENT: &str = "DisplacementIndex/1.0";

/// Transient failures get this many attempts in total.
const MAX_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// FRED observations response. Values arrive as strings; "." marks a
/// missing data point and is dropped during conversion.
#[derive(Debug, Deserialize)]
struct FredResponse {
    observations: Vec<FredObservation>,
}

#[derive(Debug, Deserialize)]
struct FredObservation {
    date: NaiveDate,
    value: String,
}

impl FredResponse {
    fn into_observations(self) -> Vec<Observation> {
        self.observations
            .into_iter()
            .filter_map(|obs| {
                if obs.value == "." {
                    return None;
                }
                obs.value
                    .parse::<f64>()
                    .ok()
                    .map(|value| Observation::new(obs.date, value))
            })
            .collect()
    }
}

/// Async FRED client with a polite inter-request delay.
pub struct FredClient {
    client: reqwest::Client,
    api_key: String,
    throttle: Duration,
}

impl FredClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let api_key = config.require_api_key()?.to_string();
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            api_key,
            throttle: config.throttle,
        })
    }

    /// Fetch one series' observations from `observation_start` onward,
    /// retrying transient failures (connection errors, 5xx, 429).
    pub async fn fetch_series(
        &self,
        series_id: &str,
        observation_start: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError> {
        let start = observation_start.format("%Y-%m-%d").to_string();
        let params = [
            ("series_id", series_id),
            ("api_key", self.api_key.as_str()),
            ("file_type", "json"),
            ("observation_start", start.as_str()),
            ("sort_order", "asc"),
        ];

        let mut attempt = 1;
        loop {
            match self.request_once(&params).await {
                Ok(observations) => return Ok(observations),
                Err(err) if attempt < MAX_ATTEMPTS && is_transient(&err) => {
                    log::warn!(
                        "Transient error fetching {} (attempt {}/{}): {}",
                        series_id,
                        attempt,
                        MAX_ATTEMPTS,
                        err
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn request_once(&self, params: &[(&str, &str)]) -> Result<Vec<Observation>, FetchError> {
        let response = self.client.get(BASE_URL).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Api(format!("FRED returned HTTP {}", status)));
        }

        let parsed: FredResponse = response.json().await?;
        Ok(parsed.into_observations())
    }

    /// Fetch the complete catalog into a [`FredDocument`].
    ///
    /// Failures are per-series: an errored series is logged and recorded
    /// empty, and the fetch moves on. Between requests the client sleeps
    /// its throttle to stay well inside the API rate limit.
    pub async fn fetch_catalog(&self, observation_start: NaiveDate) -> FredDocument {
        let total = fred_series_count();
        let mut fetched = 0;
        let mut chain_links = BTreeMap::new();

        for group in FRED_CATALOG {
            let mut series_map = BTreeMap::new();

            for meta in group.series {
                fetched += 1;
                log::info!("[{}/{}] Fetching {} ({})...", fetched, total, meta.series_id, meta.name);

                let observations = match self.fetch_series(meta.series_id, observation_start).await
                {
                    Ok(observations) => observations,
                    Err(err) => {
                        log::error!("Error fetching {}: {}", meta.series_id, err);
                        Vec::new()
                    }
                };

                series_map.insert(
                    meta.series_id.to_string(),
                    SeriesRecord::from_meta(meta, observations),
                );

                if fetched < total {
                    tokio::time::sleep(self.throttle).await;
                }
            }

            chain_links.insert(group.chain_link.to_string(), series_map);
        }

        FredDocument {
            fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            chain_links,
        }
    }

    /// Fetch an arbitrary list of series into a flat record map (used by
    /// the claims proxy).
    pub async fn fetch_series_set(
        &self,
        catalog: &[SeriesMeta],
        observation_start: NaiveDate,
    ) -> BTreeMap<String, SeriesRecord> {
        let mut series = BTreeMap::new();

        for (i, meta) in catalog.iter().enumerate() {
            log::info!("Fetching {} ({})...", meta.series_id, meta.name);

            let observations = match self.fetch_series(meta.series_id, observation_start).await {
                Ok(observations) => observations,
                Err(err) => {
                    log::error!("Error fetching {}: {}", meta.series_id, err);
                    Vec::new()
                }
            };

            series.insert(
                meta.series_id.to_string(),
                SeriesRecord::from_meta(meta, observations),
            );

            if i + 1 < catalog.len() {
                tokio::time::sleep(self.throttle).await;
            }
        }

        series
    }
}

/// Default observation window: `lookback_years` of history for context.
pub fn default_observation_start(lookback_years: i64) -> NaiveDate {
    Utc::now().date_naive() - ChronoDuration::days(lookback_years * 365)
}

fn is_transient(err: &FetchError) -> bool {
    match err {
        FetchError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        FetchError::Api(msg) => {
            msg.contains("429") || msg.contains("500") || msg.contains("502") || msg.contains("503")
        }
        _ => false,
    }
}
