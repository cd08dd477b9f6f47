//! Chart shaping: turn one series' fetch state into a renderable description.
//!
//! All data prep (value parsing, date humanization, y-domain math) happens
//! here, outside any draw call, so the TUI widget stays render-only and this
//! logic stays testable without a terminal.

use crate::domain::{Indicator, SeriesState};

pub mod axis;

pub use axis::{AxisSpec, axis_spec};

/// Chart-ready description of one series.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub series_id: &'static str,
    /// Parsed points, x = observation index.
    pub points: Vec<(f64, f64)>,
    /// Humanized date label per point ("Mar 2024"), same length as `points`.
    pub date_labels: Vec<String>,
    pub y_domain: [f64; 2],
    pub axis: AxisSpec,
    pub color: (u8, u8, u8),
}

/// What the display surface should show for one series.
#[derive(Debug, Clone)]
pub enum ChartView {
    Loading,
    Error(String),
    Chart(ChartData),
}

/// Build the view for one catalog entry from its current state.
pub fn build_chart_view(indicator: Indicator, state: &SeriesState) -> ChartView {
    if state.is_loading {
        return ChartView::Loading;
    }
    if let Some(error) = &state.error {
        return ChartView::Error(error.clone());
    }

    let axis = axis_spec(indicator.series_id());

    let mut points = Vec::with_capacity(state.data.len());
    let mut date_labels = Vec::with_capacity(state.data.len());
    let mut values = Vec::with_capacity(state.data.len());
    for obs in &state.data {
        // Sentinel rows were dropped at fetch time, so values parse here.
        let Ok(value) = obs.value.parse::<f64>() else {
            continue;
        };
        points.push((points.len() as f64, value));
        date_labels.push(obs.date.format("%b %Y").to_string());
        values.push(value);
    }

    ChartView::Chart(ChartData {
        title: indicator.display_name().to_string(),
        series_id: indicator.series_id(),
        y_domain: y_domain(&values, axis.padding_factor),
        points,
        date_labels,
        axis,
        color: indicator.color(),
    })
}

/// Padded y-axis bounds: `[max(0, min - pad), max + pad]` with
/// `pad = (max - min) * padding_factor`. Empty input defaults to `[0, 100]`.
///
/// The zero floor assumes the tracked indicators are non-negative; it would
/// clip any future indicator that can go below zero (e.g. a growth-rate
/// series).
pub fn y_domain(values: &[f64], padding_factor: f64) -> [f64; 2] {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 100.0];
    }

    let padding = (max - min) * padding_factor;
    [(min - padding).max(0.0), max + padding]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::Observation;

    fn obs(y: i32, m: u32, value: &str) -> Observation {
        Observation::new(NaiveDate::from_ymd_opt(y, m, 1).unwrap(), value)
    }

    #[test]
    fn y_domain_pads_by_range_fraction() {
        // range = 20, padding = 2
        assert_eq!(y_domain(&[10.0, 20.0, 30.0], 0.1), [8.0, 32.0]);
    }

    #[test]
    fn y_domain_floors_at_zero_only_when_needed() {
        // min - padding would be negative here; clamp to 0.
        let [lo, hi] = y_domain(&[0.5, 10.0], 0.1);
        assert_eq!(lo, 0.0);
        assert!((hi - 10.95).abs() < 1e-9);

        // Far from zero, no clamping.
        let [lo, _] = y_domain(&[100.0, 110.0], 0.1);
        assert_eq!(lo, 99.0);
    }

    #[test]
    fn y_domain_empty_defaults() {
        assert_eq!(y_domain(&[], 0.1), [0.0, 100.0]);
    }

    #[test]
    fn loading_and_error_produce_placeholders() {
        let loading = build_chart_view(Indicator::Gdp, &SeriesState::loading());
        assert!(matches!(loading, ChartView::Loading));

        let failed = build_chart_view(Indicator::Gdp, &SeriesState::failed("no luck"));
        match failed {
            ChartView::Error(msg) => assert_eq!(msg, "no luck"),
            other => panic!("expected error view, got {other:?}"),
        }
    }

    #[test]
    fn chart_view_parses_points_and_humanizes_dates() {
        let state = SeriesState::ready(vec![
            obs(2024, 1, "3.7"),
            obs(2024, 2, "3.9"),
            obs(2024, 3, "3.8"),
        ]);

        let ChartView::Chart(chart) = build_chart_view(Indicator::Unemployment, &state) else {
            panic!("expected chart view");
        };

        assert_eq!(chart.title, "Unemployment");
        assert_eq!(chart.series_id, "UNRATE");
        assert_eq!(chart.points, vec![(0.0, 3.7), (1.0, 3.9), (2.0, 3.8)]);
        assert_eq!(chart.date_labels, vec!["Jan 2024", "Feb 2024", "Mar 2024"]);
        assert_eq!(chart.color, Indicator::Unemployment.color());

        // range = 0.2, padding = 0.02
        assert!((chart.y_domain[0] - 3.68).abs() < 1e-9);
        assert!((chart.y_domain[1] - 3.92).abs() < 1e-9);
    }

    #[test]
    fn chart_view_uses_series_axis_spec() {
        let state = SeriesState::ready(vec![obs(2024, 1, "5000"), obs(2024, 2, "5200")]);
        let ChartView::Chart(chart) = build_chart_view(Indicator::Sp500, &state) else {
            panic!("expected chart view");
        };
        assert_eq!(chart.axis.label, "Index");
        assert_eq!(chart.axis.padding_factor, 0.15);
        assert_eq!((chart.axis.formatter)(5123.8), "5,124");
    }
}
