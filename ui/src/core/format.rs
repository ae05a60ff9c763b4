//! Formatting helpers for presenting report metrics.

pub fn format_percent(value: i64) -> String {
    format!("{value}%")
}

/// Confidence values arrive already scaled to 0–100 and may carry decimals.
pub fn format_confidence(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}%")
    } else {
        "—".to_string()
    }
}

pub fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(secs) if secs.is_finite() => format!("{secs:.2} s"),
        _ => "—".to_string(),
    }
}
