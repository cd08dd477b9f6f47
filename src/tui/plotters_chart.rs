//! Plotters-powered series chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::render::ChartData;

/// A lightweight, render-only chart widget.
///
/// The widget is intentionally data-driven: points, bounds, labels, and
/// formatters are all computed by `render::build_chart_view` before the draw
/// call, so `render()` stays focused on drawing.
pub struct SeriesChart<'a> {
    pub chart: &'a ChartData,
}

impl Widget for SeriesChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let chart = self.chart;
        if chart.points.is_empty() {
            return;
        }

        let x1 = (chart.points.len().saturating_sub(1)).max(1) as f64;
        let [mut y0, mut y1] = chart.y_domain;
        if !(y0.is_finite() && y1.is_finite()) {
            return;
        }
        // A flat series has a zero-height domain; widen it so Plotters can
        // still build the coordinate system.
        if y1 - y0 <= f64::EPSILON {
            y0 -= 1.0;
            y1 += 1.0;
        }

        let (r, g, b) = chart.color;
        let line_color = RGBColor(r, g, b);
        let labels = &chart.date_labels;
        let fmt_y = chart.axis.formatter;
        let y_desc = chart.axis.label;

        let widget = widget_fn(move |root| {
            let mut ctx = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(0.0..x1, y0..y1)?;

            // Axes + tick labels.
            //
            // Mesh lines are disabled to reduce visual clutter in low-resolution
            // terminal rendering; axes + labels are enough for a dashboard pane.
            ctx.configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .y_desc(y_desc)
                .x_labels(4)
                .y_labels(5)
                .x_label_formatter(&|v| date_label(labels, *v))
                .y_label_formatter(&|v| fmt_y(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            ctx.draw_series(LineSeries::new(chart.points.iter().copied(), &line_color))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Map an x tick (observation index) back to its humanized date label.
fn date_label(labels: &[String], v: f64) -> String {
    if labels.is_empty() {
        return String::new();
    }
    let idx = v.round().clamp(0.0, (labels.len() - 1) as f64) as usize;
    labels[idx].clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_label_clamps_to_series_bounds() {
        let labels = vec![
            "Jan 2024".to_string(),
            "Feb 2024".to_string(),
            "Mar 2024".to_string(),
        ];
        assert_eq!(date_label(&labels, -1.0), "Jan 2024");
        assert_eq!(date_label(&labels, 1.4), "Feb 2024");
        assert_eq!(date_label(&labels, 99.0), "Mar 2024");
        assert_eq!(date_label(&[], 0.0), "");
    }
}
