//! Full data build: run every fetcher, compute derived indicators, write
//! the report.
//!
//! Fatal only when the primary source is unusable (no API key, or FRED
//! returned nothing at all); the claims and postings fetchers are optional
//! and a failure there logs a warning and continues with partial data.

use std::time::Instant;

use displacement_index::config::Config;
use displacement_index::fetch::{
    default_observation_start, fetch_claims, fetch_postings, save_json, FetchError, FredClient,
    CLAIMS_RAW_FILE, FRED_RAW_FILE, INDICATORS_FILE, POSTINGS_RAW_FILE,
};
use displacement_index::index_core::{build_report, SeriesStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let started = Instant::now();
    log::info!("The Displacement Index - data build");

    let config = Config::from_env();
    let client = FredClient::new(&config)?;

    log::info!("Fetching FRED data...");
    let observation_start = default_observation_start(config.lookback_years);
    let fred = client.fetch_catalog(observation_start).await;
    if fred.is_entirely_empty() {
        return Err(
            FetchError::Api("FRED returned no observations for any series".to_string()).into(),
        );
    }
    save_json(&fred, &config.data_dir.join(FRED_RAW_FILE))?;

    let claims = fetch_claims(&client).await;
    if let Err(err) = save_json(&claims, &config.data_dir.join(CLAIMS_RAW_FILE)) {
        log::warn!("Claims data write failed, continuing with FRED only: {}", err);
    }

    match fetch_postings(config.request_timeout).await {
        Ok(postings) => {
            if let Err(err) = save_json(&postings, &config.data_dir.join(POSTINGS_RAW_FILE)) {
                log::warn!("Postings data write failed, continuing without it: {}", err);
            }
        }
        Err(err) => log::warn!("Postings fetch failed, continuing without it: {}", err),
    }

    log::info!("Computing derived indicators...");
    let mut store = SeriesStore::new();
    fred.populate(&mut store);
    claims.populate(&mut store);

    let report = build_report(&store, Some(fred.fetched_at.clone()));
    let out_path = config.data_dir.join(INDICATORS_FILE);
    save_json(&report, &out_path)?;

    report.log_summary();
    log::info!(
        "Build complete in {:.1}s, output: {}",
        started.elapsed().as_secs_f64(),
        out_path.display()
    );

    Ok(())
}
