//! Y-axis presentation rules, keyed by FRED series identifier.
//!
//! All per-series special cases live in this one lookup: axis label text,
//! tick/value formatter, and the padding factor used for the y-domain. The
//! default entry covers any identifier that is not in the table.

/// Axis label, value formatter, and domain padding for one series.
#[derive(Debug, Clone, Copy)]
pub struct AxisSpec {
    pub label: &'static str,
    pub formatter: fn(f64) -> String,
    pub padding_factor: f64,
}

/// Look up the axis rules for a series identifier.
///
/// Padding factors: GDP changes are large in absolute terms so it pads
/// least (0.05); market prices swing hardest and pad most (0.15); everything
/// else uses 0.1.
pub fn axis_spec(series_id: &str) -> AxisSpec {
    match series_id {
        "GDPC1" => AxisSpec {
            label: "Billions of Dollars",
            formatter: fmt_usd_billions,
            padding_factor: 0.05,
        },
        "UNRATE" => AxisSpec {
            label: "Percent",
            formatter: fmt_percent_1dp,
            padding_factor: 0.1,
        },
        "CPIAUCSL" => AxisSpec {
            label: "Index (1982-1984=100)",
            formatter: fmt_plain_1dp,
            padding_factor: 0.1,
        },
        "FEDFUNDS" | "DGS10" | "MORTGAGE30US" => AxisSpec {
            label: "Percent",
            formatter: fmt_percent_2dp,
            padding_factor: 0.1,
        },
        "SP500" => AxisSpec {
            label: "Index",
            formatter: group_thousands,
            padding_factor: 0.15,
        },
        "CBBTCUSD" => AxisSpec {
            label: "USD",
            formatter: fmt_usd,
            padding_factor: 0.15,
        },
        _ => AxisSpec {
            label: "Value",
            formatter: fmt_plain_2dp,
            padding_factor: 0.1,
        },
    }
}

fn fmt_usd_billions(v: f64) -> String {
    format!("${}B", group_thousands(v))
}

fn fmt_usd(v: f64) -> String {
    format!("${}", group_thousands(v))
}

fn fmt_percent_1dp(v: f64) -> String {
    format!("{v:.1}%")
}

fn fmt_percent_2dp(v: f64) -> String {
    format!("{v:.2}%")
}

fn fmt_plain_1dp(v: f64) -> String {
    format!("{v:.1}")
}

fn fmt_plain_2dp(v: f64) -> String {
    format!("{v:.2}")
}

/// Round to a whole number and group the digits with commas.
pub fn group_thousands(v: f64) -> String {
    let rounded = v.round();
    let digits = format!("{:.0}", rounded.abs());
    let bytes = digits.as_bytes();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.4), "999");
        assert_eq!(group_thousands(1000.0), "1,000");
        assert_eq!(group_thousands(27123.6), "27,124");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-4521.0), "-4,521");
    }

    #[test]
    fn per_series_formatters_match_display_rules() {
        assert_eq!((axis_spec("GDPC1").formatter)(21847.3), "$21,847B");
        assert_eq!((axis_spec("UNRATE").formatter)(3.67), "3.7%");
        assert_eq!((axis_spec("CPIAUCSL").formatter)(304.25), "304.2");
        assert_eq!((axis_spec("FEDFUNDS").formatter)(5.25), "5.25%");
        assert_eq!((axis_spec("DGS10").formatter)(4.5), "4.50%");
        assert_eq!((axis_spec("MORTGAGE30US").formatter)(6.875), "6.88%");
        assert_eq!((axis_spec("SP500").formatter)(5123.8), "5,124");
        assert_eq!((axis_spec("CBBTCUSD").formatter)(67890.12), "$67,890");
    }

    #[test]
    fn unknown_series_falls_back_to_generic_spec() {
        let spec = axis_spec("HOUST");
        assert_eq!(spec.label, "Value");
        assert_eq!((spec.formatter)(1.005), "1.00");
        assert_eq!(spec.padding_factor, 0.1);
    }

    #[test]
    fn padding_factors_follow_series_class() {
        assert_eq!(axis_spec("GDPC1").padding_factor, 0.05);
        assert_eq!(axis_spec("SP500").padding_factor, 0.15);
        assert_eq!(axis_spec("CBBTCUSD").padding_factor, 0.15);
        assert_eq!(axis_spec("UNRATE").padding_factor, 0.1);
    }
}
