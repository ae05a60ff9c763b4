//! Error types surfaced by the report pipeline.

use thiserror::Error;

/// Failures while accepting an analysis document from the caller.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("No analysis document provided")]
    EmptyInput,

    /// The upstream service produced a risk level outside low/medium/high.
    #[error("Unrecognized risk level `{0}` (expected low, medium or high)")]
    UnknownRiskLevel(String),

    #[error("Malformed analysis document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Failures while materializing an export of the current report.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unable to serialise report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unable to format export timestamp: {0}")]
    Timestamp(#[from] time::error::Format),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Unable to write export: {0}")]
    Io(#[from] std::io::Error),
}
