//! Pure numeric functions over observation sequences
//!
//! Every function here returns `Option<f64>` where `None` means "not enough
//! data to say anything": short series and degenerate inputs are reported
//! as no-signal, never as errors.

use super::series::{Frequency, Observation};

/// Default lookback window for [`rolling_z_score`].
pub const DEFAULT_Z_LOOKBACK: usize = 60;

/// Percent change between the last observation and the one `periods_back`
/// before it: `(current - previous) / |previous| * 100`.
///
/// Returns `None` when the series holds fewer than `periods_back + 1`
/// observations, or when the previous value is exactly zero.
pub fn percent_change(observations: &[Observation], periods_back: usize) -> Option<f64> {
    if observations.len() < periods_back + 1 {
        return None;
    }
    let current = observations[observations.len() - 1].value;
    let previous = observations[observations.len() - 1 - periods_back].value;
    if previous == 0.0 {
        return None;
    }
    Some((current - previous) / previous.abs() * 100.0)
}

/// Year-over-year percent change, with the lag resolved from the declared
/// sampling frequency.
pub fn yoy_change(observations: &[Observation], frequency: Frequency) -> Option<f64> {
    percent_change(observations, frequency.yoy_periods())
}

/// How many standard deviations the last value sits from the mean of the
/// trailing `lookback` observations (population std).
///
/// The window shrinks to the series length when fewer than `lookback`
/// observations exist, a deliberately forgiving policy so young series
/// still produce a score. Only a series shorter than 5 observations returns
/// `None`. A constant window (std == 0) returns exactly `0.0`.
pub fn rolling_z_score(observations: &[Observation], lookback: usize) -> Option<f64> {
    if observations.len() < 5 {
        return None;
    }

    let window = &observations[observations.len().saturating_sub(lookback)..];
    let n = window.len() as f64;
    let mean = window.iter().map(|o| o.value).sum::<f64>() / n;
    let variance = window.iter().map(|o| (o.value - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();

    if std == 0.0 {
        return Some(0.0);
    }

    let current = observations[observations.len() - 1].value;
    Some((current - mean) / std)
}

/// Round to two decimals for reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal for reporting.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
