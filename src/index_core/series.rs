//! Named time series of dated observations

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A single (date, value) data point.
///
/// Observations within a series are ordered by date ascending with unique
/// dates; providers are responsible for delivering them that way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: f64,
}

impl Observation {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// Declared sampling frequency of a series.
///
/// Only used to resolve the year-over-year lag; it carries no other meaning
/// in the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Quarterly => "quarterly",
        }
    }

    /// Parse a frequency string. Unknown strings resolve to monthly, which
    /// keeps the year-over-year lag at 12 for unrecognized inputs.
    pub fn parse(s: &str) -> Self {
        match s {
            "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "quarterly" => Frequency::Quarterly,
            _ => Frequency::Monthly,
        }
    }

    /// Observations per year, used as the year-over-year lag.
    pub fn yoy_periods(&self) -> usize {
        match self {
            Frequency::Daily => 252,
            Frequency::Weekly => 52,
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Frequency::parse(&s))
    }
}

/// An ordered observation sequence with its declared frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub frequency: Frequency,
    pub observations: Vec<Observation>,
}

impl Series {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            observations: Vec::new(),
        }
    }

    pub fn with_observations(frequency: Frequency, observations: Vec<Observation>) -> Self {
        Self {
            frequency,
            observations,
        }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

const NO_OBSERVATIONS: &[Observation] = &[];

/// In-memory mapping from series identifier to its observation sequence.
///
/// Populated from raw provider documents before the compute pass runs. A
/// lookup for an identifier no provider supplied behaves exactly like an
/// empty series.
#[derive(Debug, Clone, Default)]
pub struct SeriesStore {
    series: BTreeMap<String, Series>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, series_id: impl Into<String>, series: Series) {
        self.series.insert(series_id.into(), series);
    }

    pub fn get(&self, series_id: &str) -> Option<&Series> {
        self.series.get(series_id)
    }

    /// Observations for a series, or an empty slice when the identifier is
    /// absent or the series has no data.
    pub fn observations(&self, series_id: &str) -> &[Observation] {
        self.series
            .get(series_id)
            .map(|s| s.observations.as_slice())
            .unwrap_or(NO_OBSERVATIONS)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(|k| k.as_str())
    }
}
