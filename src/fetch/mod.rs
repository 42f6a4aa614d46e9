//! Data-provider boundary
//!
//! Everything that performs I/O lives here: the FRED client, the optional
//! claims and job-postings fetchers, and the raw JSON documents they
//! exchange with the compute binaries. The core consumes only the
//! populated [`SeriesStore`](crate::index_core::SeriesStore); it never
//! sees a URL, a file path, or an API key.

pub mod catalog;
pub mod claims;
pub mod documents;
pub mod error;
pub mod fred;
pub mod postings;

pub use catalog::{CatalogGroup, SeriesMeta, CLAIMS_CATALOG, FRED_CATALOG, TARGET_SECTORS};
pub use claims::fetch_claims;
pub use documents::{
    load_json, load_json_optional, save_json, ClaimsDocument, FredDocument, PostingsDocument,
    SeriesRecord,
};
pub use error::FetchError;
pub use fred::{default_observation_start, FredClient};
pub use postings::fetch_postings;

/// File names of the raw documents and the final report inside the data
/// directory.
pub const FRED_RAW_FILE: &str = "fred_raw.json";
pub const CLAIMS_RAW_FILE: &str = "claims_raw.json";
pub const POSTINGS_RAW_FILE: &str = "postings_raw.json";
pub const INDICATORS_FILE: &str = "indicators.json";
