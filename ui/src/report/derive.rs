//! Pure projection from an [`AnalysisResult`] to chart-ready series and
//! diagnostic flags. Everything here is recomputed on each render.

use crate::core::analysis::{AnalysisResult, ModelResult, RiskLevel, SentimentKind};

use super::palette::{emotion_key_color, sentiment_color, RiskPresentation};

/// One labelled slice or bar.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub percentage: i64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionAlignment {
    Aligned,
    Partial,
}

impl EmotionAlignment {
    /// Stable modifier used in CSS class names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Aligned => "aligned",
            Self::Partial => "partial",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Aligned => crate::t!("report-alignment-aligned"),
            Self::Partial => crate::t!("report-alignment-partial"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskConsistency {
    Consistent,
    Mixed,
}

impl RiskConsistency {
    /// Stable modifier used in CSS class names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::Mixed => "mixed",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Consistent => crate::t!("report-consistency-consistent"),
            Self::Mixed => crate::t!("report-consistency-mixed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Stable modifier used in CSS class names.
    pub fn slug(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::High => crate::t!("report-band-high"),
            Self::Medium => crate::t!("report-band-medium"),
            Self::Low => crate::t!("report-band-low"),
        }
    }
}

/// Aggregate over every model that contributed to the result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelAggregate {
    pub success_count: usize,
    pub total: usize,
    /// Seconds, missing timings counted as zero.
    pub total_processing_time: f64,
    /// Mean model confidence scaled to 0–100.
    pub average_confidence: f64,
}

impl ModelAggregate {
    pub fn success_ratio(&self) -> f64 {
        self.success_count as f64 / self.total as f64
    }
}

/// Display row for one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRow {
    pub model: String,
    pub succeeded: bool,
    pub confidence_pct: i64,
    pub processing_time: Option<f64>,
    pub sentiment_label: Option<String>,
    pub risk_level: Option<RiskLevel>,
}

/// Everything the report view needs, derived in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub sentiment_series: Vec<SeriesPoint>,
    pub emotion_series: Vec<SeriesPoint>,
    pub risk: RiskPresentation,
    pub model_stats: Option<ModelAggregate>,
    pub model_rows: Vec<ModelRow>,
    pub alignment: EmotionAlignment,
    pub consistency: RiskConsistency,
    pub confidence_band: ConfidenceBand,
}

pub fn derive(result: &AnalysisResult) -> DerivedMetrics {
    let metrics = DerivedMetrics {
        sentiment_series: sentiment_series(result),
        emotion_series: emotion_series(result),
        risk: RiskPresentation::for_level(result.risk_level),
        model_stats: model_stats(result),
        model_rows: model_rows(result),
        alignment: emotion_alignment(result),
        consistency: risk_consistency(result),
        confidence_band: confidence_band(result.confidence),
    };

    tracing::debug!(
        sentiment_points = metrics.sentiment_series.len(),
        emotion_points = metrics.emotion_series.len(),
        models = metrics.model_rows.len(),
        risk = %result.risk_level,
        "derived report metrics"
    );

    metrics
}

fn to_percentage(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Zero-width slices are dropped so the pie never renders degenerate segments.
pub fn sentiment_series(result: &AnalysisResult) -> Vec<SeriesPoint> {
    SentimentKind::ALL
        .into_iter()
        .map(|kind| SeriesPoint {
            label: kind.label().to_string(),
            percentage: to_percentage(result.sentiment.get(kind)),
            color: sentiment_color(kind),
        })
        .filter(|point| point.percentage != 0)
        .collect()
}

/// Entries scaled outside 0–100 come from malformed upstream data and are skipped.
pub fn emotion_series(result: &AnalysisResult) -> Vec<SeriesPoint> {
    result
        .emotions
        .entries()
        .map(|(key, value)| SeriesPoint {
            label: capitalize(key.key()),
            percentage: to_percentage(value.unwrap_or(0.0)),
            color: emotion_key_color(key),
        })
        .filter(|point| (0..=100).contains(&point.percentage))
        .collect()
}

pub fn model_stats(result: &AnalysisResult) -> Option<ModelAggregate> {
    let models = result.models()?;
    let total = models.len();

    let success_count = models.iter().filter(|model| model.succeeded()).count();
    let total_processing_time = models
        .iter()
        .map(|model| model.processing_time.unwrap_or(0.0))
        .sum::<f64>();
    let confidence_sum = models
        .iter()
        .map(|model| model.confidence.unwrap_or(0.0))
        .sum::<f64>();

    Some(ModelAggregate {
        success_count,
        total,
        total_processing_time,
        average_confidence: confidence_sum / total as f64 * 100.0,
    })
}

pub fn model_rows(result: &AnalysisResult) -> Vec<ModelRow> {
    result
        .models()
        .unwrap_or_default()
        .iter()
        .map(model_row)
        .collect()
}

fn model_row(model: &ModelResult) -> ModelRow {
    ModelRow {
        model: model.model.clone(),
        succeeded: model.succeeded(),
        confidence_pct: to_percentage(model.confidence.unwrap_or(0.0)),
        processing_time: model.processing_time,
        sentiment_label: model
            .sentiment
            .as_ref()
            .and_then(|sentiment| sentiment.label.clone()),
        risk_level: model.risk.as_ref().map(|risk| risk.level),
    }
}

pub fn emotion_alignment(result: &AnalysisResult) -> EmotionAlignment {
    let joy = result.emotions.joy.unwrap_or(0.0);
    if result.sentiment.positive > 0.5 && joy > 0.5 {
        EmotionAlignment::Aligned
    } else {
        EmotionAlignment::Partial
    }
}

/// Medium risk is never reported as consistent.
pub fn risk_consistency(result: &AnalysisResult) -> RiskConsistency {
    let sentiment = &result.sentiment;
    let consistent = match result.risk_level {
        RiskLevel::Low => sentiment.positive > sentiment.negative,
        RiskLevel::High => sentiment.negative > sentiment.positive,
        RiskLevel::Medium => false,
    };

    if consistent {
        RiskConsistency::Consistent
    } else {
        RiskConsistency::Mixed
    }
}

pub fn confidence_band(confidence: f64) -> ConfidenceBand {
    if confidence > 80.0 {
        ConfidenceBand::High
    } else if confidence > 60.0 {
        ConfidenceBand::Medium
    } else {
        ConfidenceBand::Low
    }
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
