//! Domain types shared by the fetch, render, and UI layers.
//!
//! This module defines:
//!
//! - the indicator catalog (`Indicator`) and its FRED series identifiers
//! - time-range selection (`TimeRange`) and its start-date mapping
//! - per-series observations and fetch state (`Observation`, `SeriesState`)

pub mod types;

pub use types::*;
