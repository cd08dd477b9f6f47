//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the fetch orchestrator and the TUI
//! - printed by the `show` report
//! - exported later if a snapshot format is ever needed

use chrono::{Months, NaiveDate};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The fixed catalog of tracked indicators.
///
/// Each entry maps a human-facing name to a FRED series identifier. The
/// catalog is immutable for the process lifetime; `Indicator::ALL` defines
/// the fetch and display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Indicator {
    Gdp,
    Unemployment,
    Inflation,
    FederalFundsRate,
    #[value(name = "treasury-10y")]
    Treasury10Y,
    #[value(name = "mortgage-30y")]
    Mortgage30Y,
    Sp500,
    Bitcoin,
}

impl Indicator {
    pub const ALL: [Indicator; 8] = [
        Indicator::Gdp,
        Indicator::Unemployment,
        Indicator::Inflation,
        Indicator::FederalFundsRate,
        Indicator::Treasury10Y,
        Indicator::Mortgage30Y,
        Indicator::Sp500,
        Indicator::Bitcoin,
    ];

    /// Upstream FRED series identifier.
    pub fn series_id(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDPC1",
            Indicator::Unemployment => "UNRATE",
            Indicator::Inflation => "CPIAUCSL",
            Indicator::FederalFundsRate => "FEDFUNDS",
            Indicator::Treasury10Y => "DGS10",
            Indicator::Mortgage30Y => "MORTGAGE30US",
            Indicator::Sp500 => "SP500",
            Indicator::Bitcoin => "CBBTCUSD",
        }
    }

    /// Human-facing chart title.
    pub fn display_name(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::Unemployment => "Unemployment",
            Indicator::Inflation => "Inflation",
            Indicator::FederalFundsRate => "Federal Funds Rate",
            Indicator::Treasury10Y => "Treasury 10Y",
            Indicator::Mortgage30Y => "Mortgage 30Y",
            Indicator::Sp500 => "S&P 500",
            Indicator::Bitcoin => "Bitcoin",
        }
    }

    /// Per-indicator line color (RGB).
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Indicator::Gdp => (0x2B, 0x6C, 0xB0),
            Indicator::Unemployment => (0xC5, 0x30, 0x30),
            Indicator::Inflation => (0x80, 0x5A, 0xD5),
            Indicator::FederalFundsRate => (0x38, 0xA1, 0x69),
            Indicator::Treasury10Y => (0xDD, 0x6B, 0x20),
            Indicator::Mortgage30Y => (0x31, 0x97, 0x95),
            Indicator::Sp500 => (0x31, 0x82, 0xCE),
            Indicator::Bitcoin => (0xE5, 0x3E, 0x3E),
        }
    }
}

/// Selectable observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    #[value(name = "1y")]
    OneYear,
    #[value(name = "5y")]
    FiveYears,
    #[value(name = "all")]
    All,
}

impl TimeRange {
    /// Map the range to a concrete observation start date.
    ///
    /// `1y`/`5y` are relative to `today`; `All` is the fixed epoch the
    /// dashboard starts its history at.
    pub fn start_date(self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeRange::OneYear => today.checked_sub_months(Months::new(12)).unwrap_or(today),
            TimeRange::FiveYears => today.checked_sub_months(Months::new(60)).unwrap_or(today),
            TimeRange::All => NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            TimeRange::OneYear => "1 Year",
            TimeRange::FiveYears => "5 Years",
            TimeRange::All => "All",
        }
    }
}

/// One (date, value) data point within a series.
///
/// The value stays textual: FRED represents missing data with sentinel
/// strings, and the fetch layer drops those rows so every value that reaches
/// the renderer parses as a decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: String,
}

impl Observation {
    pub fn new(date: NaiveDate, value: impl Into<String>) -> Self {
        Self {
            date,
            value: value.into(),
        }
    }
}

/// Message stored when a fetch succeeds but carries no observations.
pub const NO_DATA_ERROR: &str = "No data available for this indicator";

/// Fetch state for one catalog entry.
///
/// Lifecycle: created via `loading()` when a fetch round begins, then
/// transitions exactly once to `ready` or `failed`; it only re-enters the
/// loading state when the next round starts. `data` and `error` are mutually
/// exclusive once loading has finished, enforced by the constructors: a
/// `ready` state always has observations, and an observation-free result
/// becomes `failed(NO_DATA_ERROR)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesState {
    pub data: Vec<Observation>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SeriesState {
    pub fn loading() -> Self {
        Self {
            data: Vec::new(),
            is_loading: true,
            error: None,
        }
    }

    pub fn ready(data: Vec<Observation>) -> Self {
        if data.is_empty() {
            return Self::failed(NO_DATA_ERROR);
        }
        Self {
            data,
            is_loading: false,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            is_loading: false,
            error: Some(message.into()),
        }
    }

    pub fn is_ready(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }
}
