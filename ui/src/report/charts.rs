use dioxus::prelude::*;

use crate::core::format;
use crate::report::derive::SeriesPoint;

const PIE_SIZE: f64 = 200.0;
const PIE_RADIUS: f64 = 90.0;

/// SVG geometry for one pie segment.
#[derive(Debug, Clone, PartialEq)]
pub enum PieSlice {
    /// The only non-empty category; drawn as a full circle.
    Full { color: &'static str },
    Arc { path: String, color: &'static str },
}

/// Lay the series out clockwise from twelve o'clock. Angles are proportional
/// to each point's share of the summed percentages.
pub fn pie_slices(series: &[SeriesPoint], cx: f64, cy: f64, radius: f64) -> Vec<PieSlice> {
    let total: i64 = series.iter().map(|point| point.percentage.max(0)).sum();
    if total <= 0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(series.len());
    let mut start = 0.0_f64;

    for point in series {
        let share = point.percentage.max(0) as f64 / total as f64;
        if share <= 0.0 {
            continue;
        }
        if share >= 1.0 {
            slices.push(PieSlice::Full { color: point.color });
            break;
        }

        let end = start + share;
        let (x0, y0) = polar(cx, cy, radius, start);
        let (x1, y1) = polar(cx, cy, radius, end);
        let large_arc = if share > 0.5 { 1 } else { 0 };
        let path = format!(
            "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
        );
        slices.push(PieSlice::Arc {
            path,
            color: point.color,
        });
        start = end;
    }

    slices
}

fn polar(cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

#[component]
pub fn SentimentChart(series: Vec<SeriesPoint>) -> Element {
    let center = PIE_SIZE / 2.0;
    let slices = pie_slices(&series, center, center, PIE_RADIUS);

    rsx! {
        section { class: "report-card report-chart report-chart--sentiment",
            div { class: "report-card__header",
                h2 { {crate::t!("report-sentiment-title")} }
            }

            if slices.is_empty() {
                p { class: "report-card__placeholder", {crate::t!("report-sentiment-empty")} }
            } else {
                div { class: "report-chart__body",
                    svg {
                        class: "report-chart__pie",
                        width: "{PIE_SIZE}",
                        height: "{PIE_SIZE}",
                        view_box: "0 0 {PIE_SIZE} {PIE_SIZE}",
                        for slice in slices.into_iter() {
                            match slice {
                                PieSlice::Full { color } => rsx! {
                                    circle { cx: "{center}", cy: "{center}", r: "{PIE_RADIUS}", fill: "{color}" }
                                },
                                PieSlice::Arc { path: outline, color } => rsx! {
                                    path { d: "{outline}", fill: "{color}" }
                                },
                            }
                        }
                    }

                    ul { class: "report-chart__legend",
                        for point in series.iter() {
                            li { class: "report-chart__legend-item",
                                span { class: "report-chart__legend-swatch", style: "background: {point.color}" }
                                span { class: "report-chart__legend-label", "{point.label}" }
                                span { class: "report-chart__legend-value", "{format::format_percent(point.percentage)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn EmotionChart(series: Vec<SeriesPoint>) -> Element {
    rsx! {
        section { class: "report-card report-chart report-chart--emotions",
            div { class: "report-card__header",
                h2 { {crate::t!("report-emotions-title")} }
            }

            if series.is_empty() {
                p { class: "report-card__placeholder", {crate::t!("report-emotions-empty")} }
            } else {
                ul { class: "report-bars",
                    for point in series.iter() {
                        li { class: "report-bars__row",
                            span { class: "report-bars__label", "{point.label}" }
                            div { class: "report-bars__track",
                                div {
                                    class: "report-bars__fill",
                                    style: "width: {point.percentage}%; background: {point.color}",
                                }
                            }
                            span { class: "report-bars__value", "{format::format_percent(point.percentage)}" }
                        }
                    }
                }
            }
        }
    }
}
