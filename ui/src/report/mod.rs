pub mod derive;
pub use derive::{derive, DerivedMetrics};

pub mod palette;

mod charts;
pub use charts::{pie_slices, EmotionChart, PieSlice, SentimentChart};

mod models;
pub use models::ModelBreakdown;

mod content;
pub use content::{content_preview, AnalyzedContent, ContentPreview, CONTENT_PREVIEW_LIMIT};

mod export;
pub use export::{
    export_document, export_filename, iso_timestamp, prepare_export, ReportExport,
    ReportExportPanel, EXPORT_FILE_PREFIX,
};

mod renderer;
pub use renderer::ReportRenderer;
