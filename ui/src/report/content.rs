use dioxus::prelude::*;

/// Maximum number of analyzed snippets shown in the report.
pub const CONTENT_PREVIEW_LIMIT: usize = 15;

/// Display window over the analyzed content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPreview<'a> {
    pub shown: &'a [String],
    pub total: usize,
}

impl ContentPreview<'_> {
    pub fn hidden(&self) -> usize {
        self.total - self.shown.len()
    }

    pub fn is_truncated(&self) -> bool {
        self.hidden() > 0
    }

    /// "…and N more (M total)" when entries were cut off.
    pub fn note(&self) -> Option<String> {
        self.is_truncated().then(|| {
            crate::t!("report-content-more", hidden = self.hidden(), total = self.total)
        })
    }
}

pub fn content_preview(entries: &[String], limit: usize) -> ContentPreview<'_> {
    ContentPreview {
        shown: &entries[..entries.len().min(limit)],
        total: entries.len(),
    }
}

#[component]
pub fn AnalyzedContent(entries: Vec<String>, #[props(!optional)] summary: Option<String>) -> Element {
    let preview = content_preview(&entries, CONTENT_PREVIEW_LIMIT);
    let total = preview.total;
    let shown = preview.shown.to_vec();
    let note = preview.note();

    rsx! {
        section { class: "report-card report-content",
            div { class: "report-card__header",
                h2 { {crate::t!("report-content-title")} }
                span { class: "report-card__meta", {crate::t!("report-content-count", count = total)} }
            }

            if let Some(text) = summary {
                p { class: "report-content__summary", "{text}" }
            }

            ol { class: "report-content__items",
                for (idx, snippet) in shown.into_iter().enumerate() {
                    li { key: "{idx}", class: "report-content__item", "{snippet}" }
                }
            }

            if let Some(note) = note {
                p { class: "report-content__more", "{note}" }
            }
        }
    }
}
