use dioxus::prelude::*;

use crate::core::analysis::AnalysisResult;
use crate::report::ReportRenderer;

/// Example document bundled for demos and first launch.
pub const SAMPLE_ANALYSIS: &str = include_str!("../../assets/sample-analysis.json");

#[component]
pub fn ReportPage() -> Element {
    // Subscribe to global language code (if provided) so the page re-renders
    // immediately when the locale changes in the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut draft = use_signal(String::new);
    let report = use_signal(|| Option::<AnalysisResult>::None);
    let error = use_signal(|| Option::<String>::None);

    let current = report();
    let error_message = error();

    rsx! {
        // Hidden marker node retains reactive dependency on language signal.
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-report",
            h1 { {crate::t!("page-report-title")} }
            p { {crate::t!("page-report-intro")} }

            div { class: "report-import",
                label { class: "visually-hidden", r#for: "report-import-input",
                    {crate::t!("report-import-label")}
                }
                textarea {
                    id: "report-import-input",
                    class: "report-import__input",
                    rows: "8",
                    placeholder: crate::t!("report-import-placeholder"),
                    value: "{draft}",
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                div { class: "report-import__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| apply_document(&draft(), report, error),
                        {crate::t!("report-import-render")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--accent",
                        onclick: move |_| {
                            draft.set(SAMPLE_ANALYSIS.to_string());
                            apply_document(SAMPLE_ANALYSIS, report, error);
                        },
                        {crate::t!("report-import-sample")}
                    }
                }
                if let Some(err) = error_message {
                    p { class: "report-import__error", "⚠️ {err}" }
                }
            }

            match current {
                // Keyed by language so memoized report sections pick up new strings.
                Some(result) => rsx! {
                    div { key: "{_lang_marker}", class: "page-report__body",
                        ReportRenderer { result }
                    }
                },
                None => rsx! {
                    p { class: "report-card__placeholder", {crate::t!("page-report-empty")} }
                },
            }
        }
    }
}

fn apply_document(
    raw: &str,
    mut report: Signal<Option<AnalysisResult>>,
    mut error: Signal<Option<String>>,
) {
    match AnalysisResult::from_json(raw) {
        Ok(result) => {
            tracing::debug!(risk = %result.risk_level, "accepted analysis document");
            report.set(Some(result));
            error.set(None);
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected analysis document");
            report.set(None);
            error.set(Some(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_parses() {
        let result = AnalysisResult::from_json(SAMPLE_ANALYSIS).expect("sample is valid");
        assert!(result.models().is_some());
        assert!(result.analyzed_content.as_ref().is_some_and(|c| c.len() > 15));
    }
}
