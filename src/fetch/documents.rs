//! Raw data documents exchanged between fetchers and the compute pass
//!
//! Each provider writes one JSON document per run; the compute binaries
//! read them back and populate the series store. Document shapes mirror
//! what goes on disk, observation lists included, so a saved document is
//! the complete record of what a fetch produced.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::catalog::SeriesMeta;
use super::error::FetchError;
use crate::index_core::{Frequency, Observation, Series, SeriesStore};

/// One named series as a provider delivers it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub series_id: Option<String>,
    pub name: String,
    pub frequency: Frequency,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
    pub observations: Vec<Observation>,
    pub latest: Option<Observation>,
    pub count: usize,
}

impl SeriesRecord {
    /// Build a record from catalog metadata and fetched observations;
    /// `latest` and `count` are derived.
    pub fn from_meta(meta: &SeriesMeta, observations: Vec<Observation>) -> Self {
        Self {
            series_id: Some(meta.series_id.to_string()),
            name: meta.name.to_string(),
            frequency: meta.frequency,
            unit: meta.unit.to_string(),
            note: meta.note.map(|n| n.to_string()),
            latest: observations.last().copied(),
            count: observations.len(),
            observations,
        }
    }

    pub fn to_series(&self) -> Series {
        Series::with_observations(self.frequency, self.observations.clone())
    }
}

/// The primary FRED document: series grouped by chain link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FredDocument {
    pub fetched_at: String,
    pub chain_links: BTreeMap<String, BTreeMap<String, SeriesRecord>>,
}

impl FredDocument {
    /// Copy every series into the store, keyed by its identifier. Group
    /// membership is a layout detail of this document; the store is flat.
    pub fn populate(&self, store: &mut SeriesStore) {
        for series_map in self.chain_links.values() {
            for (series_id, record) in series_map {
                store.insert(series_id.clone(), record.to_series());
            }
        }
    }

    pub fn total_observations(&self) -> usize {
        self.chain_links
            .values()
            .flat_map(|m| m.values())
            .map(|r| r.count)
            .sum()
    }

    /// True when no series carries a single observation: the primary
    /// source is entirely unavailable and a run cannot proceed.
    pub fn is_entirely_empty(&self) -> bool {
        self.total_observations() == 0
    }
}

/// The layoff-claims proxy document (optional source).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsDocument {
    pub fetched_at: String,
    pub source: String,
    pub series: BTreeMap<String, SeriesRecord>,
}

impl ClaimsDocument {
    pub fn populate(&self, store: &mut SeriesStore) {
        for (series_id, record) in &self.series {
            store.insert(series_id.clone(), record.to_series());
        }
    }
}

/// The Indeed job-postings document (optional source). Sector series are
/// keyed by display name, not FRED identifiers, so this document is
/// persisted for downstream consumers but not loaded into the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostingsDocument {
    pub fetched_at: String,
    pub source: String,
    pub attribution: String,
    pub aggregate: SeriesRecord,
    pub sectors: BTreeMap<String, SeriesRecord>,
}

/// Write a document as pretty-printed JSON.
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

/// Read a required document; a missing file is a fatal
/// [`FetchError::MissingDocument`].
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    if !path.exists() {
        return Err(FetchError::MissingDocument(path.display().to_string()));
    }
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Read an optional document; a missing file is `None`, not an error.
pub fn load_json_optional<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, FetchError> {
    if !path.exists() {
        log::info!("Optional data file not found: {}", path.display());
        return Ok(None);
    }
    let json = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&json)?))
}
