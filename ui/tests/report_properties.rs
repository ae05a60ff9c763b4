//! End-to-end checks of the derivation pipeline over fixture documents.

use proptest::prelude::*;
use time::macros::datetime;
use ui::core::analysis::{AnalysisResult, Emotions, RiskLevel, SentimentScores};
use ui::core::error::ReportError;
use ui::report::derive::{
    emotion_series, risk_consistency, sentiment_series, ConfidenceBand, EmotionAlignment,
    RiskConsistency,
};
use ui::report::{content_preview, derive, prepare_export, CONTENT_PREVIEW_LIMIT};

const LOW_RISK: &str = include_str!("fixtures/low_risk.json");
const UNKNOWN_RISK: &str = include_str!("fixtures/unknown_risk.json");

fn low_risk() -> AnalysisResult {
    AnalysisResult::from_json(LOW_RISK).expect("fixture parses")
}

fn with_sentiment(positive: f64, negative: f64, neutral: f64, risk: RiskLevel) -> AnalysisResult {
    AnalysisResult {
        sentiment: SentimentScores {
            positive,
            negative,
            neutral,
        },
        emotions: Emotions::default(),
        risk_level: risk,
        confidence: 50.0,
        recommendations: Vec::new(),
        model_results: None,
        analyzed_content: None,
        content_summary: None,
        raw_document: None,
    }
}

#[test]
fn fixture_derives_expected_report() {
    let metrics = derive(&low_risk());

    assert_eq!(metrics.consistency, RiskConsistency::Consistent);
    assert_eq!(metrics.alignment, EmotionAlignment::Aligned);
    assert_eq!(metrics.confidence_band, ConfidenceBand::High);

    let emotions: Vec<&str> = metrics
        .emotion_series
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(emotions, ["Joy", "Anger", "Fear", "Surprise", "Disgust"]);

    let stats = metrics.model_stats.expect("two models present");
    assert_eq!((stats.success_count, stats.total), (1, 2));
    assert!((stats.total_processing_time - 2.0).abs() < 1e-9);
    assert!((stats.average_confidence - 65.0).abs() < 1e-9);
    assert_eq!(metrics.model_rows.len(), 2);
}

#[test]
fn fixture_content_is_capped_at_fifteen() {
    let result = low_risk();
    let entries = result.analyzed_content.as_deref().unwrap_or_default();
    let preview = content_preview(entries, CONTENT_PREVIEW_LIMIT);
    assert_eq!(preview.shown.len(), 15);
    assert_eq!(preview.total, 20);
}

#[test]
fn fixture_export_keeps_confidence_and_stamps_time() {
    let export = prepare_export(&low_risk(), datetime!(2025-01-02 03:04:05.678 UTC)).unwrap();

    assert!(export.contents.contains("\"confidence\": 87.34"));
    assert!(export
        .contents
        .contains("\"timestamp\": \"2025-01-02T03:04:05.678Z\""));

    let stem = export
        .filename
        .strip_prefix("mental-health-analysis-")
        .and_then(|rest| rest.strip_suffix(".json"))
        .expect("filename pattern");
    assert!(!stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn unknown_risk_level_fails_loudly() {
    match AnalysisResult::from_json(UNKNOWN_RISK) {
        Err(ReportError::UnknownRiskLevel(level)) => assert_eq!(level, "critical"),
        other => panic!("expected UnknownRiskLevel, got {other:?}"),
    }
    assert!("critical".parse::<RiskLevel>().is_err());
}

proptest! {
    #[test]
    fn sentiment_percentages_sum_to_about_one_hundred(x in 0.0f64..=1.0, y in 0.0f64..=1.0) {
        let positive = x;
        let negative = (1.0 - x) * y;
        let neutral = 1.0 - positive - negative;
        let series = sentiment_series(&with_sentiment(positive, negative, neutral, RiskLevel::Low));

        let sum: i64 = series.iter().map(|p| p.percentage).sum();
        prop_assert!(!series.is_empty());
        prop_assert!((sum - 100).abs() <= series.len() as i64, "sum {} over {:?}", sum, series);
        prop_assert!(series.iter().all(|p| p.percentage != 0));
    }

    #[test]
    fn emotion_series_stays_within_bounds(values in proptest::collection::vec(-2.0f64..3.0, 6)) {
        let mut result = with_sentiment(0.4, 0.4, 0.2, RiskLevel::High);
        result.emotions = Emotions {
            joy: Some(values[0]),
            sadness: Some(values[1]),
            anger: Some(values[2]),
            fear: Some(values[3]),
            surprise: Some(values[4]),
            disgust: Some(values[5]),
            ..Emotions::default()
        };

        let series = emotion_series(&result);
        prop_assert!(series.iter().all(|p| (0..=100).contains(&p.percentage)));
        prop_assert!(series.len() <= 6);
    }

    #[test]
    fn medium_risk_never_consistent(pos in 0.0f64..=1.0, neg in 0.0f64..=1.0) {
        let result = with_sentiment(pos, neg, 0.0, RiskLevel::Medium);
        prop_assert_eq!(risk_consistency(&result), RiskConsistency::Mixed);
    }
}
