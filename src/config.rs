//! Pipeline configuration
//!
//! Built from environment variables by the binaries and passed explicitly
//! to provider construction. The core and its tests never read ambient
//! process state; everything they need arrives as a parameter.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default polite delay between FRED requests (the API allows 120/min).
const DEFAULT_THROTTLE_MS: u64 = 600;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOOKBACK_YEARS: i64 = 5;
const DEFAULT_DATA_DIR: &str = "data";
const SECRETS_KEY_FILE: &str = "secrets/fred-api-key.txt";

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct Config {
    /// FRED API key, if one could be resolved.
    pub api_key: Option<String>,

    /// Directory raw documents and the report are written to.
    pub data_dir: PathBuf,

    /// Per-request HTTP timeout.
    pub request_timeout: Duration,

    /// Delay between consecutive FRED requests.
    pub throttle: Duration,

    /// Years of history requested from FRED.
    pub lookback_years: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            throttle: Duration::from_millis(DEFAULT_THROTTLE_MS),
            lookback_years: DEFAULT_LOOKBACK_YEARS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `FRED_API_KEY` (falls back to `secrets/fred-api-key.txt`)
    /// - `INDEX_DATA_DIR` (default: data)
    /// - `FRED_REQUEST_TIMEOUT_SECS` (default: 30)
    /// - `FRED_THROTTLE_MS` (default: 600)
    /// - `INDEX_LOOKBACK_YEARS` (default: 5)
    pub fn from_env() -> Self {
        Self {
            api_key: resolve_api_key(
                env::var("FRED_API_KEY").ok(),
                Path::new(SECRETS_KEY_FILE),
            ),

            data_dir: env::var("INDEX_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),

            request_timeout: Duration::from_secs(
                env::var("FRED_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),

            throttle: Duration::from_millis(
                env::var("FRED_THROTTLE_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_THROTTLE_MS),
            ),

            lookback_years: env::var("INDEX_LOOKBACK_YEARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_LOOKBACK_YEARS),
        }
    }

    /// The API key, or the error the orchestrator treats as fatal.
    pub fn require_api_key(&self) -> Result<&str, crate::fetch::FetchError> {
        self.api_key
            .as_deref()
            .ok_or(crate::fetch::FetchError::MissingApiKey)
    }
}

/// Resolve the FRED API key from an env-supplied value or a secrets file.
///
/// Whitespace is trimmed; an empty value in either place counts as absent.
fn resolve_api_key(env_value: Option<String>, secrets_path: &Path) -> Option<String> {
    if let Some(key) = env_value {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Some(key);
        }
    }

    if let Ok(contents) = fs::read_to_string(secrets_path) {
        let key = contents.trim().to_string();
        if !key.is_empty() {
            log::info!("Loaded FRED API key from {}", secrets_path.display());
            return Some(key);
        }
    }

    None
}
