//! Upstream data access.
//!
//! `fred` holds the HTTP client; this module defines the per-series failure
//! taxonomy and the `SeriesSource` seam the orchestrator fetches through, so
//! orchestration tests can run against an in-memory source.

use chrono::NaiveDate;

use crate::domain::{Observation, NO_DATA_ERROR};

pub mod fred;

pub use fred::FredClient;

/// Per-series fetch failure.
///
/// These are recoverable at the granularity of one series: the orchestrator
/// stores the `Display` string on the failed entry and keeps going. Only a
/// missing credential (`AppError`, exit code 2) is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never reached FRED. The transport detail is kept for
    /// `Debug`; `Display` stays generic because reqwest errors can echo the
    /// request URL, which carries the API key.
    Network(String),
    /// Non-success status, with FRED's `error_message` body when decodable.
    Upstream { status: u16, message: Option<String> },
    /// Response body did not have the expected shape.
    Malformed(String),
    /// Syntactically valid response with zero usable observations.
    Empty,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(_) => {
                write!(
                    f,
                    "Network error: Unable to connect to FRED API. Please try again later."
                )
            }
            FetchError::Upstream {
                status,
                message: Some(message),
            } => write!(f, "API error ({status}): {message}"),
            FetchError::Upstream {
                status,
                message: None,
            } => write!(f, "FRED request failed with status {status}."),
            FetchError::Malformed(detail) => write!(f, "Invalid FRED response: {detail}"),
            FetchError::Empty => f.write_str(NO_DATA_ERROR),
        }
    }
}

impl std::error::Error for FetchError {}

/// Capability to fetch one series' observations from a start date onward.
///
/// Implementations must return observations in ascending date order and fail
/// distinctly per `FetchError`.
pub trait SeriesSource {
    fn fetch_observations(
        &self,
        series_id: &str,
        start_date: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError>;
}
