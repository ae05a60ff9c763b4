//! Input contract: one precomputed analysis document produced by the upstream
//! analysis service. Values are rendered as-is; nothing here is recomputed.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ReportError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: SentimentScores,
    #[serde(default)]
    pub emotions: Emotions,
    pub risk_level: RiskLevel,
    /// Overall confidence, already scaled to 0–100.
    pub confidence: f64,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_results: Option<Vec<ModelResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_content: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_summary: Option<String>,
    /// The document exactly as received, kept so exports reproduce it verbatim.
    #[serde(skip)]
    pub raw_document: Option<Map<String, Value>>,
}

impl AnalysisResult {
    /// Parse a caller-supplied JSON document.
    ///
    /// The risk level is checked before the full decode so an out-of-contract
    /// value is reported as such instead of as a generic decode failure.
    pub fn from_json(raw: &str) -> Result<Self, ReportError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ReportError::EmptyInput);
        }

        let value: Value = serde_json::from_str(raw)?;
        if let Some(level) = value.get("riskLevel").and_then(Value::as_str) {
            level.parse::<RiskLevel>()?;
        }

        let raw_document = value.as_object().cloned();
        let mut result: Self = serde_json::from_value(value)?;
        result.raw_document = raw_document;
        Ok(result)
    }

    /// Top-level fields for export: the received document when there is one,
    /// otherwise the typed fields.
    pub fn document_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        if let Some(raw) = &self.raw_document {
            return Ok(raw.clone());
        }
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }

    /// Model results, treating an empty list the same as an absent one.
    pub fn models(&self) -> Option<&[ModelResult]> {
        self.model_results
            .as_deref()
            .filter(|models| !models.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentKind {
    Positive,
    Negative,
    Neutral,
}

impl SentimentKind {
    pub const ALL: [SentimentKind; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl SentimentScores {
    pub fn get(&self, kind: SentimentKind) -> f64 {
        match kind {
            SentimentKind::Positive => self.positive,
            SentimentKind::Negative => self.negative,
            SentimentKind::Neutral => self.neutral,
        }
    }
}

/// Six-way affect distribution. Individual scores may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Emotions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sadness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anger: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surprise: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disgust: Option<f64>,
    /// Categories the dashboard has no dedicated color for.
    #[serde(flatten)]
    pub other: BTreeMap<String, Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionKind {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
}

impl EmotionKind {
    pub const ALL: [EmotionKind; 6] = [
        Self::Joy,
        Self::Sadness,
        Self::Anger,
        Self::Fear,
        Self::Surprise,
        Self::Disgust,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Anger => "anger",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
        }
    }
}

/// Emotion category as seen in the document: one of the six known kinds or an
/// extra key passed through from upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionKey<'a> {
    Known(EmotionKind),
    Other(&'a str),
}

impl EmotionKey<'_> {
    pub fn key(&self) -> &str {
        match self {
            Self::Known(kind) => kind.key(),
            Self::Other(key) => key,
        }
    }
}

impl Emotions {
    pub fn get(&self, kind: EmotionKind) -> Option<f64> {
        match kind {
            EmotionKind::Joy => self.joy,
            EmotionKind::Sadness => self.sadness,
            EmotionKind::Anger => self.anger,
            EmotionKind::Fear => self.fear,
            EmotionKind::Surprise => self.surprise,
            EmotionKind::Disgust => self.disgust,
        }
    }

    /// Known categories in display order, followed by any extra keys.
    pub fn entries(&self) -> impl Iterator<Item = (EmotionKey<'_>, Option<f64>)> + '_ {
        EmotionKind::ALL
            .into_iter()
            .map(|kind| (EmotionKey::Known(kind), self.get(kind)))
            .chain(
                self.other
                    .iter()
                    .map(|(key, value)| (EmotionKey::Other(key.as_str()), *value)),
            )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = ReportError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ReportError::UnknownRiskLevel(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    #[serde(alias = "model_name")]
    pub model: String,
    pub status: ModelStatus,
    /// Model confidence in 0–1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Seconds spent by this model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<ModelSentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk: Option<ModelRisk>,
}

impl ModelResult {
    pub fn succeeded(&self) -> bool {
        self.status == ModelStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSentiment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRisk {
    pub level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "sentiment": {"positive": 0.6, "negative": 0.3, "neutral": 0.1},
        "emotions": {"joy": 0.4, "sadness": null, "boredom": 0.2},
        "riskLevel": "medium",
        "confidence": 72.5
    }"#;

    #[test]
    fn parses_minimal_document() {
        let result = AnalysisResult::from_json(MINIMAL).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.emotions.joy, Some(0.4));
        assert_eq!(result.emotions.sadness, None);
        assert_eq!(result.emotions.other.get("boredom"), Some(&Some(0.2)));
        assert!(result.recommendations.is_empty());
        assert!(result.model_results.is_none());
        assert!(result.analyzed_content.is_none());
    }

    #[test]
    fn unknown_risk_level_is_reported() {
        let raw = MINIMAL.replace("\"medium\"", "\"severe\"");
        match AnalysisResult::from_json(&raw) {
            Err(ReportError::UnknownRiskLevel(level)) => assert_eq!(level, "severe"),
            other => panic!("expected UnknownRiskLevel, got {other:?}"),
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(matches!(
            AnalysisResult::from_json("  \n"),
            Err(ReportError::EmptyInput)
        ));
        assert!(matches!(
            AnalysisResult::from_json("{"),
            Err(ReportError::Malformed(_))
        ));
    }

    #[test]
    fn empty_model_list_counts_as_absent() {
        let mut result = AnalysisResult::from_json(MINIMAL).unwrap();
        result.model_results = Some(Vec::new());
        assert!(result.models().is_none());
    }

    #[test]
    fn emotion_entries_list_known_kinds_first() {
        let result = AnalysisResult::from_json(MINIMAL).unwrap();
        let keys: Vec<String> = result
            .emotions
            .entries()
            .map(|(key, _)| key.key().to_string())
            .collect();
        assert_eq!(
            keys,
            ["joy", "sadness", "anger", "fear", "surprise", "disgust", "boredom"]
        );
    }

    #[test]
    fn received_document_is_kept_verbatim() {
        let result = AnalysisResult::from_json(MINIMAL).unwrap();
        let fields = result.document_fields().unwrap();
        assert_eq!(fields.get("emotions").and_then(|e| e.get("sadness")), Some(&Value::Null));
        assert!(!fields.contains_key("recommendations"));
    }
}
