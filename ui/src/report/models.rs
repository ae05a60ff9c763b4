use dioxus::prelude::*;

use crate::core::format;
use crate::report::derive::{ModelAggregate, ModelRow};

#[component]
pub fn ModelBreakdown(stats: ModelAggregate, rows: Vec<ModelRow>) -> Element {
    let ratio = format!("{}/{}", stats.success_count, stats.total);
    let total_time = format::format_seconds(Some(stats.total_processing_time));
    let average = format::format_percent(stats.average_confidence.round() as i64);

    rsx! {
        section { class: "report-card report-models",
            div { class: "report-card__header",
                h2 { {crate::t!("report-models-title")} }
                span { class: "report-card__meta", {crate::t!("report-models-count", count = stats.total)} }
            }

            div { class: "report-highlights",
                div { class: "report-highlight",
                    span { class: "report-highlight__label", {crate::t!("report-models-success")} }
                    strong { class: "report-highlight__value", "{ratio}" }
                }
                div { class: "report-highlight",
                    span { class: "report-highlight__label", {crate::t!("report-models-time")} }
                    strong { class: "report-highlight__value", "{total_time}" }
                }
                div { class: "report-highlight",
                    span { class: "report-highlight__label", {crate::t!("report-models-confidence")} }
                    strong { class: "report-highlight__value", "{average}" }
                }
            }

            ul { class: "report-models__list",
                for row in rows.into_iter() {
                    {render_row(row)}
                }
            }
        }
    }
}

fn render_row(row: ModelRow) -> Element {
    let status_class = if row.succeeded {
        "report-models__status report-models__status--success"
    } else {
        "report-models__status report-models__status--failure"
    };
    let status_label = if row.succeeded {
        crate::t!("report-model-status-success")
    } else {
        crate::t!("report-model-status-failure")
    };
    let confidence = format::format_percent(row.confidence_pct);
    let timing = format::format_seconds(row.processing_time);

    rsx! {
        li { class: "report-models__item",
            span { class: "report-models__name", "{row.model}" }
            span { class: "{status_class}", "{status_label}" }
            span { class: "report-models__metric", "{confidence}" }
            span { class: "report-models__metric", "{timing}" }
            if let Some(label) = row.sentiment_label.as_ref() {
                span { class: "report-models__tag", "{label}" }
            }
            if let Some(level) = row.risk_level {
                span { class: "report-models__tag report-models__tag--{level}", "{level}" }
            }
        }
    }
}
