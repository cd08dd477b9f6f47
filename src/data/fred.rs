//! FRED API client for the dashboard indicator series.

use chrono::{Local, NaiveDate};
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::data::{FetchError, SeriesSource};
use crate::domain::Observation;
use crate::error::AppError;

const BASE_URL: &str = "https://api.stlouisfed.org/fred/series/observations";

/// Series that are only meaningful against today's vintage; FRED wants an
/// explicit as-of window for these.
const REALTIME_SERIES: [&str; 3] = ["DGS10", "MORTGAGE30US", "CBBTCUSD"];

pub struct FredClient {
    client: Client,
    api_key: String,
}

impl FredClient {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var("FRED_API_KEY")
            .map_err(|_| AppError::config("Missing FRED_API_KEY in environment (.env)."))?;
        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    fn fetch_series(
        &self,
        series_id: &str,
        start_date: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError> {
        let today = Local::now().date_naive();
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[("api_key", self.api_key.as_str())])
            .query(&query_params(series_id, start_date, today))
            .send()
            // Strip the URL: reqwest errors echo it, and it carries the key.
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().ok().and_then(|body| extract_error_message(&body));
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: ObservationsResponse = resp
            .json()
            .map_err(|e| FetchError::Malformed(e.without_url().to_string()))?;

        collect_observations(body)
    }
}

impl SeriesSource for FredClient {
    fn fetch_observations(
        &self,
        series_id: &str,
        start_date: NaiveDate,
    ) -> Result<Vec<Observation>, FetchError> {
        self.fetch_series(series_id, start_date)
    }
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: String,
}

/// Build the per-series query string (everything except the API key).
///
/// - all series: JSON payload, ascending order, explicit start date
/// - `GDPC1` is quarterly; request quarterly aggregation explicitly
/// - realtime series get today's as-of window and plain output
fn query_params(
    series_id: &str,
    start_date: NaiveDate,
    today: NaiveDate,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("series_id", series_id.to_string()),
        ("file_type", "json".to_string()),
        ("observation_start", start_date.to_string()),
        ("sort_order", "asc".to_string()),
    ];

    if series_id == "GDPC1" {
        params.push(("frequency", "q".to_string()));
    }

    if REALTIME_SERIES.contains(&series_id) {
        params.push(("realtime_start", today.to_string()));
        params.push(("realtime_end", today.to_string()));
        params.push(("output_type", "1".to_string()));
    }

    params
}

/// Convert the wire payload into domain observations.
///
/// FRED reports missing data as a "." value; those rows are dropped here so
/// the success path always carries parseable values. Zero usable rows is an
/// error, not an empty chart.
fn collect_observations(body: ObservationsResponse) -> Result<Vec<Observation>, FetchError> {
    let mut out = Vec::with_capacity(body.observations.len());
    for obs in body.observations {
        if !has_numeric_value(&obs.value) {
            continue;
        }
        let date = NaiveDate::parse_from_str(&obs.date, "%Y-%m-%d").map_err(|e| {
            FetchError::Malformed(format!("invalid observation date '{}': {e}", obs.date))
        })?;
        out.push(Observation::new(date, obs.value.trim()));
    }

    if out.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(out)
}

fn has_numeric_value(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed == "." || trimmed.is_empty() {
        return false;
    }
    trimmed.parse::<f64>().map(|v| v.is_finite()).unwrap_or(false)
}

/// Pull `error_message` out of a FRED error body, if it has one.
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        error_message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error_message)
}
