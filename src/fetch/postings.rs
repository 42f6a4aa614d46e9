//! Indeed Hiring Lab job-postings fetcher
//!
//! Free, public, CC-BY-4.0 daily job-postings indexes published as CSVs:
//! one aggregate US index plus per-sector postings, filtered here to the
//! white-collar sectors the displacement thesis tracks. Optional source.
//!
//! Source: https://github.com/hiring-lab/job_postings_tracker

use chrono::{NaiveDate, SecondsFormat, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

use super::catalog::TARGET_SECTORS;
use super::documents::{PostingsDocument, SeriesRecord};
use super::error::FetchError;
use crate::index_core::{Frequency, Observation};

const BASE_URL: &str =
    "https://raw.githubusercontent.com/hiring-lab/job_postings_tracker/master/US";
const USER_AGENT: &str = "DisplacementIndex/1.0";
const SOURCE: &str = "Indeed Hiring Lab (CC-BY-4.0)";
const ATTRIBUTION: &str = "Indeed Hiring Lab, https://github.com/hiring-lab/job_postings_tracker";

/// Daily data is huge; keep roughly two years.
const MAX_OBSERVATIONS: usize = 730;

const UNIT: &str = "index_feb2020_100";

/// Fetch and assemble the postings document.
pub async fn fetch_postings(timeout: Duration) -> Result<PostingsDocument, FetchError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;

    log::info!("Fetching aggregate US postings...");
    let aggregate_csv = fetch_csv(&client, &format!("{}/aggregate_job_postings_US.csv", BASE_URL)).await?;
    let aggregate = parse_aggregate(&aggregate_csv)?;
    log::info!("Aggregate: {} observations", aggregate.count);

    log::info!("Fetching sector-level postings...");
    let sector_csv = fetch_csv(&client, &format!("{}/job_postings_by_sector_US.csv", BASE_URL)).await?;
    let sectors = parse_sectors(&sector_csv)?;
    for (name, record) in &sectors {
        log::info!("{}: {} observations", name, record.count);
    }

    Ok(PostingsDocument {
        fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        source: SOURCE.to_string(),
        attribution: ATTRIBUTION.to_string(),
        aggregate,
        sectors,
    })
}

async fn fetch_csv(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Api(format!("{} returned HTTP {}", url, status)));
    }
    Ok(response.text().await?)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn parse_observation(date: &str, value: &str) -> Option<Observation> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let value: f64 = value.parse().ok()?;
    Some(Observation::new(date, value))
}

fn capped(mut observations: Vec<Observation>) -> Vec<Observation> {
    if observations.len() > MAX_OBSERVATIONS {
        observations.drain(..observations.len() - MAX_OBSERVATIONS);
    }
    observations
}

fn record_from(name: String, note: Option<&str>, observations: Vec<Observation>) -> SeriesRecord {
    let observations = capped(observations);
    SeriesRecord {
        series_id: None,
        name,
        frequency: Frequency::Daily,
        unit: UNIT.to_string(),
        note: note.map(|n| n.to_string()),
        latest: observations.last().copied(),
        count: observations.len(),
        observations,
    }
}

/// Parse the aggregate US postings index. Prefers the seasonally adjusted
/// column, falling back to the raw index when it is absent. Rows that fail
/// to parse are skipped.
fn parse_aggregate(csv_text: &str) -> Result<SeriesRecord, FetchError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();

    let date_col = column_index(&headers, "date")
        .ok_or_else(|| FetchError::Api("aggregate postings CSV has no date column".to_string()))?;
    let value_col = column_index(&headers, "indeed_job_postings_index_SA")
        .or_else(|| column_index(&headers, "indeed_job_postings_index"))
        .ok_or_else(|| FetchError::Api("aggregate postings CSV has no index column".to_string()))?;

    let mut observations = Vec::new();
    for record in reader.records() {
        let record = record?;
        let (Some(date), Some(value)) = (record.get(date_col), record.get(value_col)) else {
            continue;
        };
        if let Some(obs) = parse_observation(date, value) {
            observations.push(obs);
        }
    }

    Ok(record_from(
        "Indeed Job Postings Index (SA)".to_string(),
        Some("Seasonally adjusted. 100 = Feb 1, 2020 baseline."),
        observations,
    ))
}

/// Parse sector-level postings, keeping only total-postings rows for the
/// target white-collar sectors.
fn parse_sectors(csv_text: &str) -> Result<BTreeMap<String, SeriesRecord>, FetchError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();

    let missing =
        |name: &str| FetchError::Api(format!("sector postings CSV has no {} column", name));
    let date_col = column_index(&headers, "date").ok_or_else(|| missing("date"))?;
    let sector_col = column_index(&headers, "display_name").ok_or_else(|| missing("display_name"))?;
    let variable_col = column_index(&headers, "variable").ok_or_else(|| missing("variable"))?;
    let value_col = column_index(&headers, "indeed_job_postings_index")
        .ok_or_else(|| missing("indeed_job_postings_index"))?;

    let mut by_sector: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for record in reader.records() {
        let record = record?;
        let Some(sector) = record.get(sector_col) else {
            continue;
        };
        if !TARGET_SECTORS.contains(&sector) {
            continue;
        }
        if record.get(variable_col) != Some("total postings") {
            continue;
        }
        let (Some(date), Some(value)) = (record.get(date_col), record.get(value_col)) else {
            continue;
        };
        if let Some(obs) = parse_observation(date, value) {
            by_sector.entry(sector.to_string()).or_default().push(obs);
        }
    }

    Ok(by_sector
        .into_iter()
        .map(|(sector, observations)| {
            let record = record_from(format!("Indeed Postings: {}", sector), None, observations);
            (sector, record)
        })
        .collect())
}
