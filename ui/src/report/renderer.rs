use dioxus::prelude::*;

use crate::core::{analysis::AnalysisResult, format};
use crate::report::{
    derive::{self, ConfidenceBand, DerivedMetrics},
    AnalyzedContent, EmotionChart, ModelBreakdown, ReportExportPanel, SentimentChart,
};

/// Renders one analysis result. Derived values are recomputed on every pass.
#[component]
pub fn ReportRenderer(result: AnalysisResult) -> Element {
    let metrics = derive::derive(&result);
    let DerivedMetrics {
        sentiment_series,
        emotion_series,
        risk,
        model_stats,
        model_rows,
        alignment,
        consistency,
        confidence_band,
    } = metrics;

    let confidence_label = format::format_confidence(result.confidence);
    let bar_width = if result.confidence.is_finite() {
        result.confidence.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let band_class = match confidence_band {
        ConfidenceBand::High => "report-confidence__fill report-confidence__fill--high",
        ConfidenceBand::Medium => "report-confidence__fill report-confidence__fill--medium",
        ConfidenceBand::Low => "report-confidence__fill report-confidence__fill--low",
    };
    let risk_level = risk.level.as_str().to_uppercase();

    let content = result.analyzed_content.clone();
    let summary = result.content_summary.clone();

    rsx! {
        div { class: "report",
            div { class: "report__overview",
                section { class: "report-card report-risk {risk.theme.css_class()}",
                    div { class: "report-card__header",
                        h2 { {crate::t!("report-risk-title")} }
                    }
                    div { class: "report-risk__body",
                        span {
                            class: "report-risk__icon",
                            "data-icon": "{risk.icon.id()}",
                            aria_hidden: "true",
                            "{risk.icon.glyph()}"
                        }
                        strong { class: "report-risk__level", "{risk_level}" }
                    }
                    p { class: "report-risk__description", "{risk.description()}" }
                }

                section { class: "report-card report-confidence",
                    div { class: "report-card__header",
                        h2 { {crate::t!("report-confidence-title")} }
                        span { class: "report-card__meta", "{confidence_band.label()}" }
                    }
                    div { class: "report-confidence__track",
                        div { class: "{band_class}", style: "width: {bar_width}%" }
                    }
                    strong { class: "report-confidence__value", "{confidence_label}" }
                }

                section { class: "report-card report-diagnostics",
                    div { class: "report-card__header",
                        h2 { {crate::t!("report-diagnostics-title")} }
                    }
                    ul { class: "report-diagnostics__list",
                        li {
                            span { class: "report-diagnostics__label", {crate::t!("report-diagnostics-alignment")} }
                            span { class: "report-diagnostics__value report-diagnostics__value--{alignment.slug()}", "{alignment.label()}" }
                        }
                        li {
                            span { class: "report-diagnostics__label", {crate::t!("report-diagnostics-consistency")} }
                            span { class: "report-diagnostics__value report-diagnostics__value--{consistency.slug()}", "{consistency.label()}" }
                        }
                        li {
                            span { class: "report-diagnostics__label", {crate::t!("report-diagnostics-confidence")} }
                            span { class: "report-diagnostics__value report-diagnostics__value--{confidence_band.slug()}", "{confidence_band.label()}" }
                        }
                    }
                }
            }

            div { class: "report__charts",
                SentimentChart { series: sentiment_series }
                EmotionChart { series: emotion_series }
            }

            if let Some(stats) = model_stats {
                ModelBreakdown { stats, rows: model_rows }
            }

            match content {
                Some(entries) => rsx! {
                    AnalyzedContent { entries, summary }
                },
                None => rsx! {
                    if let Some(text) = summary {
                        section { class: "report-card report-content",
                            div { class: "report-card__header",
                                h2 { {crate::t!("report-content-title")} }
                            }
                            p { class: "report-content__summary", "{text}" }
                        }
                    }
                },
            }

            ReportExportPanel { result: result.clone() }
        }
    }
}
