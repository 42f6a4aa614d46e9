//! The Displacement Index
//!
//! Batch pipeline that turns public macroeconomic time series into a single
//! 0-100 composite "economic displacement" score. Fetchers pull raw series
//! from FRED and the Indeed Hiring Lab into JSON documents; the pure core
//! computes derived indicators, per-link aggregates, and the composite
//! index; the result is written as `indicators.json`.

pub mod config;
pub mod fetch;
pub mod index_core;

pub use config::Config;
pub use index_core::{build_report, DisplacementReport, SeriesStore};
