//! Fixed categorical lookup tables. Colors never depend on data values.

use crate::core::analysis::{EmotionKey, EmotionKind, RiskLevel, SentimentKind};

pub const FALLBACK_EMOTION_COLOR: &str = "#9CA3AF";

pub fn sentiment_color(kind: SentimentKind) -> &'static str {
    match kind {
        SentimentKind::Positive => "#10B981",
        SentimentKind::Negative => "#EF4444",
        SentimentKind::Neutral => "#6B7280",
    }
}

pub fn emotion_color(kind: EmotionKind) -> &'static str {
    match kind {
        EmotionKind::Joy => "#FBBF24",
        EmotionKind::Sadness => "#3B82F6",
        EmotionKind::Anger => "#DC2626",
        EmotionKind::Fear => "#8B5CF6",
        EmotionKind::Surprise => "#EC4899",
        EmotionKind::Disgust => "#059669",
    }
}

pub fn emotion_key_color(key: EmotionKey<'_>) -> &'static str {
    match key {
        EmotionKey::Known(kind) => emotion_color(kind),
        EmotionKey::Other(_) => FALLBACK_EMOTION_COLOR,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskIcon {
    CheckCircle,
    AlertTriangle,
    AlertOctagon,
}

impl RiskIcon {
    pub fn id(self) -> &'static str {
        match self {
            Self::CheckCircle => "check-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::AlertOctagon => "alert-octagon",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::CheckCircle => "✓",
            Self::AlertTriangle => "⚠",
            Self::AlertOctagon => "⛔",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTheme {
    Green,
    Amber,
    Red,
}

impl RiskTheme {
    /// CSS modifier applied to the risk card, e.g. `report-risk--green`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Green => "report-risk--green",
            Self::Amber => "report-risk--amber",
            Self::Red => "report-risk--red",
        }
    }
}

/// Visual treatment for one risk level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskPresentation {
    pub level: RiskLevel,
    pub icon: RiskIcon,
    pub theme: RiskTheme,
}

impl RiskPresentation {
    pub fn for_level(level: RiskLevel) -> Self {
        let (icon, theme) = match level {
            RiskLevel::Low => (RiskIcon::CheckCircle, RiskTheme::Green),
            RiskLevel::Medium => (RiskIcon::AlertTriangle, RiskTheme::Amber),
            RiskLevel::High => (RiskIcon::AlertOctagon, RiskTheme::Red),
        };

        Self { level, icon, theme }
    }

    /// One-sentence explanation of the level in the active language.
    pub fn description(&self) -> String {
        match self.level {
            RiskLevel::Low => crate::t!("report-risk-low-description"),
            RiskLevel::Medium => crate::t!("report-risk-medium-description"),
            RiskLevel::High => crate::t!("report-risk-high-description"),
        }
    }
}
