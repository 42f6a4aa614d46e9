//! Error type for the data-provider boundary
//!
//! Only the fetch layer produces these; the core never fails, it encodes
//! missing data as `None`/`unknown` instead.

#[derive(Debug)]
pub enum FetchError {
    Http(reqwest::Error),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Csv(csv::Error),
    /// Non-success HTTP status or malformed API payload.
    Api(String),
    /// No FRED API key in the environment or the secrets file.
    MissingApiKey,
    /// A required raw document is absent; the run cannot proceed.
    MissingDocument(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Http(err)
    }
}

impl From<std::io::Error> for FetchError {
    fn from(err: std::io::Error) -> Self {
        FetchError::Io(err)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Serialization(err)
    }
}

impl From<csv::Error> for FetchError {
    fn from(err: csv::Error) -> Self {
        FetchError::Csv(err)
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
            FetchError::Io(e) => write!(f, "IO error: {}", e),
            FetchError::Serialization(e) => write!(f, "Serialization error: {}", e),
            FetchError::Csv(e) => write!(f, "CSV error: {}", e),
            FetchError::Api(msg) => write!(f, "API error: {}", msg),
            FetchError::MissingApiKey => write!(
                f,
                "No FRED API key. Set FRED_API_KEY or create secrets/fred-api-key.txt"
            ),
            FetchError::MissingDocument(path) => {
                write!(f, "Required data file not found: {}. Run the fetchers first.", path)
            }
        }
    }
}

impl std::error::Error for FetchError {}
