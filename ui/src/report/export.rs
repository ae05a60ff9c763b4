use dioxus::prelude::*;
use serde_json::{Map, Value};
use time::{macros::format_description, OffsetDateTime, UtcOffset};

use crate::core::analysis::AnalysisResult;
use crate::core::error::ExportError;
#[cfg(target_arch = "wasm32")]
use crate::core::platform;

pub const EXPORT_FILE_PREFIX: &str = "mental-health-analysis";

/// A ready-to-save export of one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportExport {
    pub filename: String,
    pub contents: String,
}

pub fn prepare_export(
    result: &AnalysisResult,
    at: OffsetDateTime,
) -> Result<ReportExport, ExportError> {
    Ok(ReportExport {
        filename: export_filename(at),
        contents: export_document(result, at)?,
    })
}

pub fn export_filename(at: OffsetDateTime) -> String {
    let millis = at.unix_timestamp_nanos() / 1_000_000;
    format!("{EXPORT_FILE_PREFIX}-{millis}.json")
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2025-03-14T09:26:53.589Z`.
pub fn iso_timestamp(at: OffsetDateTime) -> Result<String, ExportError> {
    Ok(at.to_offset(UtcOffset::UTC).format(&format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))?)
}

/// The received document with the export time stamped in front of it. Fields
/// of the document win over the stamp, as with an object spread.
pub fn export_document(result: &AnalysisResult, at: OffsetDateTime) -> Result<String, ExportError> {
    let mut document = Map::new();
    document.insert("timestamp".to_string(), Value::String(iso_timestamp(at)?));
    for (key, value) in result.document_fields()? {
        document.insert(key, value);
    }
    Ok(serde_json::to_string_pretty(&Value::Object(document))?)
}

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(String),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportAction {
    Download,
    Copy,
}

#[component]
pub fn ReportExportPanel(result: AnalysisResult) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("report-card__meta".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "report-card__meta report-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "report-card__meta report-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let download_handler = export_handler(result.clone(), ExportAction::Download, status, busy);
    let copy_handler = export_handler(result, ExportAction::Copy, status, busy);

    rsx! {
        section { class: "report-card report-export",
            div { class: "report-card__header",
                h2 { {crate::t!("report-export-title")} }
            }

            p { {crate::t!("report-export-intro")} }

            div { class: "report-export__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy(),
                    onclick: download_handler,
                    {crate::t!("report-export-download")}
                }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: busy(),
                    onclick: copy_handler,
                    {crate::t!("report-export-copy")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn export_handler(
    result: AnalysisResult,
    action: ExportAction,
    mut status_signal: Signal<ExportStatus>,
    mut busy_signal: Signal<bool>,
) -> impl FnMut(MouseEvent) {
    move |_| {
        if busy_signal() {
            return;
        }
        busy_signal.set(true);
        let label = match action {
            ExportAction::Download => crate::t!("report-export-working"),
            ExportAction::Copy => crate::t!("report-export-copying"),
        };
        status_signal.set(ExportStatus::Working(label));
        let result = result.clone();

        #[cfg(target_arch = "wasm32")]
        {
            platform::spawn_future(async move {
                let outcome = perform_export(result, action).await;
                finish(outcome, status_signal, busy_signal);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let outcome = futures::executor::block_on(perform_export(result, action));
            finish(outcome, status_signal, busy_signal);
        }
    }
}

fn finish(
    outcome: Result<String, ExportError>,
    mut status_signal: Signal<ExportStatus>,
    mut busy_signal: Signal<bool>,
) {
    match outcome {
        Ok(message) => {
            tracing::info!("{message}");
            status_signal.set(ExportStatus::Done(message));
        }
        Err(err) => {
            tracing::warn!(error = %err, "report export failed");
            status_signal.set(ExportStatus::Error(err.to_string()));
        }
    }
    busy_signal.set(false);
}

async fn perform_export(result: AnalysisResult, action: ExportAction) -> Result<String, ExportError> {
    let export = prepare_export(&result, OffsetDateTime::now_utc())?;
    match action {
        ExportAction::Download => {
            let delivery = download_json(&export.filename, export.contents).await?;
            Ok(match delivery {
                Some(path) => crate::t!("report-export-saved", path = path),
                None => crate::t!("report-export-started", filename = export.filename),
            })
        }
        ExportAction::Copy => {
            copy_to_clipboard(export.contents).await?;
            Ok(crate::t!("report-export-copied"))
        }
    }
}

async fn copy_to_clipboard(payload: String) -> Result<(), ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ExportError::Clipboard(what.to_string());
        let window = web_sys::window().ok_or_else(|| unavailable("window unavailable"))?;
        let document = window
            .document()
            .ok_or_else(|| unavailable("document unavailable"))?;
        let body = document.body().ok_or_else(|| unavailable("missing body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("unable to create textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast failed"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
            .and_then(|html| html.exec_command("copy").ok())
            .unwrap_or(false);
        textarea.remove();

        if copied {
            Ok(())
        } else {
            Err(unavailable("copy blocked by the browser"))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ExportError::Clipboard(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ExportError::Clipboard(err.to_string()))
    }
}

/// Web builds hand the file to the browser (`Ok(None)`); native builds write
/// it to the export folder and return the path.
async fn download_json(filename: &str, contents: String) -> Result<Option<String>, ExportError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let failed = |what: &str| ExportError::Download(what.to_string());

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(&contents));

        let opts = BlobPropertyBag::new();
        opts.set_type("application/json");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
            .map_err(|_| failed("unable to create blob"))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| failed("unable to create object URL"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| failed("document unavailable"))?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| failed("unable to create anchor"))?
            .dyn_into()
            .map_err(|_| failed("anchor cast failed"))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or_else(|| failed("missing body"))?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let dir = crate::core::platform::desktop_export_dir().map_err(ExportError::Download)?;
        fs::create_dir_all(&dir)?;
        let path = dir.join(filename);
        fs::write(&path, contents)?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::{Emotions, RiskLevel, SentimentScores};
    use time::macros::datetime;

    fn sample() -> AnalysisResult {
        AnalysisResult {
            sentiment: SentimentScores {
                positive: 0.2,
                negative: 0.7,
                neutral: 0.1,
            },
            emotions: Emotions {
                sadness: Some(0.6),
                ..Emotions::default()
            },
            risk_level: RiskLevel::High,
            confidence: 87.34,
            recommendations: vec!["Reach out to someone you trust".into()],
            model_results: None,
            analyzed_content: None,
            content_summary: Some("12 posts".into()),
            raw_document: None,
        }
    }

    #[test]
    fn filename_uses_epoch_millis() {
        let at = datetime!(2024-05-01 12:00:00.250 UTC);
        assert_eq!(export_filename(at), "mental-health-analysis-1714564800250.json");
    }

    #[test]
    fn timestamp_is_utc_iso8601_with_millis() {
        let at = datetime!(2024-05-01 14:00:00.250 +02:00);
        assert_eq!(iso_timestamp(at).unwrap(), "2024-05-01T12:00:00.250Z");
    }

    #[test]
    fn document_keeps_raw_fields_and_adds_timestamp() {
        let at = datetime!(2024-05-01 12:00:00 UTC);
        let json = export_document(&sample(), at).unwrap();

        assert!(json.starts_with("{\n  \"timestamp\": \"2024-05-01T12:00:00.000Z\""));
        assert!(json.contains("\"confidence\": 87.34"));
        assert!(json.contains("\"riskLevel\": \"high\""));
        assert!(json.contains("\"contentSummary\": \"12 posts\""));
        assert!(json.contains("Reach out to someone you trust"));
        assert!(!json.contains("modelResults"));
    }

    #[test]
    fn document_reproduces_received_fields() {
        let raw = r#"{
            "sentiment": {"positive": 0.5, "negative": 0.3, "neutral": 0.2},
            "emotions": {"joy": null, "sadness": 0.2},
            "riskLevel": "low",
            "confidence": 55,
            "modelResults": [{"model": "bert", "status": "success", "extra": "x"}],
            "source": "twitter"
        }"#;
        let result = AnalysisResult::from_json(raw).unwrap();
        let json = export_document(&result, datetime!(2024-05-01 12:00:00 UTC)).unwrap();

        assert!(json.starts_with("{\n  \"timestamp\": \"2024-05-01T12:00:00.000Z\""));
        assert!(json.contains("\"confidence\": 55,"), "{json}");
        assert!(json.contains("\"source\": \"twitter\""));
        assert!(json.contains("\"extra\": \"x\""));
        assert!(json.contains("\"joy\": null"));
        assert!(!json.contains("recommendations"));

        let keys: Vec<String> = serde_json::from_str::<Map<String, Value>>(&json)
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(
            keys,
            ["timestamp", "sentiment", "emotions", "riskLevel", "confidence", "modelResults", "source"]
        );
    }

    #[test]
    fn exported_document_parses_back() {
        let at = datetime!(2024-05-01 12:00:00 UTC);
        let export = prepare_export(&sample(), at).unwrap();
        let reparsed = AnalysisResult::from_json(&export.contents).unwrap();
        assert_eq!(reparsed.confidence, 87.34);
        assert_eq!(reparsed.risk_level, RiskLevel::High);
    }
}
