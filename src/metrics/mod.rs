pub mod correctness;
pub mod fairness;
pub mod license;
pub mod maintainability;
pub mod net;

use crate::error::ScoreError;
use crate::registry::{Fetched, Lookup};
use crate::types::scoring::{round_to, Metric, MetricResult, Score, ScoreCard};
use std::time::{Duration, Instant};
use tracing::warn;

pub type Rule = fn(&Lookup) -> Score;

/// Runs one metric rule against a lookup and times it.
///
/// The rule itself is pure; the evaluator owns the timing and the fallback
/// when a rule produces something that is not a valid score.
#[derive(Clone, Copy)]
pub struct Evaluator {
    pub metric: Metric,
    rule: Rule,
    failure_score: Score,
}

impl Evaluator {
    pub fn standard(metric: Metric) -> Self {
        let (rule, failure_score): (Rule, Score) = match metric {
            Metric::Correctness => (correctness::correctness_score, correctness::FAILURE_SCORE),
            Metric::Fairness => (fairness::fairness_score, fairness::FAILURE_SCORE),
            Metric::Maintainability => (
                maintainability::maintainability_score,
                maintainability::FAILURE_SCORE,
            ),
            Metric::License => (license::license_score, license::FAILURE_SCORE),
        };
        Self {
            metric,
            rule,
            failure_score,
        }
    }

    /// Fairness ignores registry data, so it is not charged for the fetch.
    fn uses_metadata(&self) -> bool {
        !matches!(self.metric, Metric::Fairness)
    }

    pub fn evaluate(&self, fetched: &Fetched) -> MetricResult {
        let started = Instant::now();
        let score = match checked(self.metric, (self.rule)(&fetched.lookup)) {
            Ok(score) => score,
            Err(err) => {
                warn!(metric = %self.metric, error = %err, "metric fell back to failure score");
                self.failure_score
            }
        };

        let mut elapsed = started.elapsed();
        if self.uses_metadata() {
            elapsed += fetched.elapsed;
        }
        MetricResult {
            score,
            latency_ms: to_millis(elapsed),
        }
    }
}

fn checked(metric: Metric, score: Score) -> Result<Score, ScoreError> {
    if !score.is_finite() || !(0.0..=1.0).contains(&score) {
        return Err(ScoreError::ScoreOutOfRange(metric.name(), score));
    }
    Ok(round_to(score, 3))
}

pub fn to_millis(elapsed: Duration) -> u64 {
    (elapsed.as_secs_f64() * 1000.0).round() as u64
}

pub fn evaluate_all(fetched: &Fetched) -> ScoreCard {
    ScoreCard {
        correctness: Evaluator::standard(Metric::Correctness).evaluate(fetched),
        fairness: Evaluator::standard(Metric::Fairness).evaluate(fetched),
        maintainability: Evaluator::standard(Metric::Maintainability).evaluate(fetched),
        license: Evaluator::standard(Metric::License).evaluate(fetched),
    }
}
