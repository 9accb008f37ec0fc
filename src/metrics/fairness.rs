use crate::registry::Lookup;
use crate::types::scoring::Score;

pub const FAILURE_SCORE: Score = 0.4;

/// Placeholder heuristic: no bias analysis is performed, so every model gets
/// the same baseline regardless of its metadata.
pub fn fairness_score(_lookup: &Lookup) -> Score {
    0.6
}
