//! Number formatting helpers for chart labels and readouts.

/// Format a chart-axis value compactly across the ranges the
/// dashboards produce: utilization shares, $mn figures, multiples,
/// and raw-dollar revenue in the millions.
pub fn format_scalar(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return if value > 0.0 {
            String::from("inf")
        } else {
            String::from("-inf")
        };
    }

    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 10_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if abs >= 100.0 {
        format!("{value:.0}")
    } else if abs >= 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.2}")
    }
}

/// Format a fraction as a percentage with 2 decimal places.
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}
