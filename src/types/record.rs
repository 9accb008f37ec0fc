use crate::types::scoring::{Score, ScoreCard};
use serde::Serialize;

/// One output line per evaluated model locator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Correctness")]
    pub correctness: Score,
    #[serde(rename = "Correctness_Latency")]
    pub correctness_latency: u64,
    #[serde(rename = "Fairness")]
    pub fairness: Score,
    #[serde(rename = "Fairness_Latency")]
    pub fairness_latency: u64,
    #[serde(rename = "Maintainability")]
    pub maintainability: Score,
    #[serde(rename = "Maintainability_Latency")]
    pub maintainability_latency: u64,
    #[serde(rename = "License")]
    pub license: Score,
    #[serde(rename = "License_Latency")]
    pub license_latency: u64,
    #[serde(rename = "NetScore")]
    pub net_score: Score,
}

impl EvaluationRecord {
    pub fn new(url: impl Into<String>, card: &ScoreCard, net_score: Score) -> Self {
        Self {
            url: url.into(),
            correctness: card.correctness.score,
            correctness_latency: card.correctness.latency_ms,
            fairness: card.fairness.score,
            fairness_latency: card.fairness.latency_ms,
            maintainability: card.maintainability.score,
            maintainability_latency: card.maintainability.latency_ms,
            license: card.license.score,
            license_latency: card.license.latency_ms,
            net_score,
        }
    }
}
