//! Plain-text dashboard summary for the `show` subcommand.
//!
//! Formatting lives in one place so output changes stay localized and the
//! fetch/render code stays clean.

use crate::domain::{Indicator, TimeRange};
use crate::fetch::SeriesStore;
use crate::render::axis_spec;

/// Format the per-indicator summary table after a completed round.
///
/// With `only` set, the table is restricted to that single indicator.
pub fn format_dashboard(
    store: &SeriesStore,
    range: TimeRange,
    only: Option<Indicator>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== econ — FRED dashboard ({}) ===\n",
        range.display_name()
    ));
    out.push_str(&format!(
        "{:<20} {:<12} {:>14} {:>6}\n",
        "Indicator", "Latest", "Value", "Obs"
    ));

    for (indicator, state) in store.iter() {
        if only.is_some_and(|wanted| wanted != indicator) {
            continue;
        }
        let name = indicator.display_name();

        if state.is_loading {
            out.push_str(&format!("{name:<20} (loading)\n"));
            continue;
        }
        if let Some(error) = &state.error {
            out.push_str(&format!("{name:<20} error: {error}\n"));
            continue;
        }

        // Observations arrive in ascending date order; last is latest.
        let latest = state
            .data
            .last()
            .and_then(|obs| obs.value.parse::<f64>().ok().map(|v| (obs.date, v)));
        match latest {
            Some((date, value)) => {
                let spec = axis_spec(indicator.series_id());
                out.push_str(&format!(
                    "{name:<20} {:<12} {:>14} {:>6}\n",
                    date.to_string(),
                    (spec.formatter)(value),
                    state.data.len(),
                ));
            }
            None => out.push_str(&format!("{name:<20} (no data)\n")),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::data::FetchError;
    use crate::domain::Observation;

    #[test]
    fn dashboard_table_mixes_values_and_errors() {
        let mut store = SeriesStore::new();
        let round = store.begin_round();

        let d = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        for indicator in Indicator::ALL {
            store.apply(
                round,
                indicator,
                Ok(vec![Observation::new(d, "3.5"), Observation::new(d, "3.7")]),
            );
        }
        store.apply(round, Indicator::Bitcoin, Err(FetchError::Empty));

        let table = format_dashboard(&store, TimeRange::FiveYears, None);

        assert!(table.contains("(5 Years)"));
        assert!(table.contains("Unemployment"));
        assert!(table.contains("3.7%"));
        assert!(table.contains("error: No data available for this indicator"));
        assert!(!table.contains("(loading)"));
    }

    #[test]
    fn dashboard_table_marks_inflight_entries() {
        let mut store = SeriesStore::new();
        store.begin_round();
        let table = format_dashboard(&store, TimeRange::All, None);
        assert_eq!(
            table.matches("(loading)").count(),
            Indicator::ALL.len()
        );
    }

    #[test]
    fn single_indicator_filter_restricts_the_table() {
        let mut store = SeriesStore::new();
        let round = store.begin_round();

        let d = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        for indicator in Indicator::ALL {
            store.apply(round, indicator, Ok(vec![Observation::new(d, "42000")]));
        }

        let table = format_dashboard(&store, TimeRange::OneYear, Some(Indicator::Bitcoin));

        assert!(table.contains("Bitcoin"));
        assert!(!table.contains("Unemployment"));
        assert!(!table.contains("GDP"));
        // Header plus column row plus exactly one data row.
        assert_eq!(table.lines().count(), 3);
    }
}
