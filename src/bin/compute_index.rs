//! Recompute `indicators.json` from raw documents already on disk.
//!
//! Useful for iterating on the compute pass without refetching. Fatal if
//! the FRED document is missing; the claims document is optional.

use displacement_index::config::Config;
use displacement_index::fetch::{
    load_json, load_json_optional, save_json, ClaimsDocument, FredDocument, CLAIMS_RAW_FILE,
    FRED_RAW_FILE, INDICATORS_FILE,
};
use displacement_index::index_core::{build_report, SeriesStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();

    log::info!("Loading raw data...");
    let fred: FredDocument = load_json(&config.data_dir.join(FRED_RAW_FILE))?;
    let claims: Option<ClaimsDocument> =
        load_json_optional(&config.data_dir.join(CLAIMS_RAW_FILE))?;

    let mut store = SeriesStore::new();
    fred.populate(&mut store);
    if let Some(claims) = &claims {
        claims.populate(&mut store);
    }

    log::info!("Computing derived indicators...");
    let report = build_report(&store, Some(fred.fetched_at.clone()));

    let out_path = config.data_dir.join(INDICATORS_FILE);
    save_json(&report, &out_path)?;

    report.log_summary();
    log::info!("Written to {}", out_path.display());

    Ok(())
}
