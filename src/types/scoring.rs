use crate::error::ScoreError;
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Correctness,
    Fairness,
    Maintainability,
    License,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Correctness => "Correctness",
            Metric::Fairness => "Fairness",
            Metric::Maintainability => "Maintainability",
            Metric::License => "License",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One metric's score and the wall-clock milliseconds spent producing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricResult {
    pub score: Score,
    pub latency_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCard {
    pub correctness: MetricResult,
    pub fairness: MetricResult,
    pub maintainability: MetricResult,
    pub license: MetricResult,
}

impl ScoreCard {
    pub fn get(&self, metric: Metric) -> MetricResult {
        match metric {
            Metric::Correctness => self.correctness,
            Metric::Fairness => self.fairness,
            Metric::Maintainability => self.maintainability,
            Metric::License => self.license,
        }
    }
}

/// Fixed aggregation weights.
pub const WEIGHTS: [(Metric, Score); 4] = [
    (Metric::Correctness, 0.40),
    (Metric::Fairness, 0.25),
    (Metric::Maintainability, 0.25),
    (Metric::License, 0.10),
];

/// Checked once at startup; the aggregator never renormalizes.
pub fn verify_weights() -> Result<(), ScoreError> {
    let sum: Score = WEIGHTS.iter().map(|(_, weight)| weight).sum();
    if (sum - 1.0).abs() > Score::EPSILON {
        return Err(ScoreError::InvalidWeights(sum));
    }
    Ok(())
}

pub fn round_to(value: Score, decimals: i32) -> Score {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_exactly_one() {
        let sum: Score = WEIGHTS.iter().map(|(_, weight)| weight).sum();
        assert_eq!(sum, 1.0);
        assert!(verify_weights().is_ok());
    }

    #[test]
    fn round_to_removes_float_noise() {
        assert_eq!(round_to(0.8 + 0.1 + 0.1, 3), 1.0);
        assert_eq!(round_to(0.3 + 0.3 + 0.2, 3), 0.8);
        assert_eq!(round_to(0.44449, 3), 0.444);
    }
}
