use crate::registry::Lookup;
use crate::types::scoring::Score;

pub const FAILURE_SCORE: Score = 0.0;

pub fn correctness_score(lookup: &Lookup) -> Score {
    match lookup {
        Lookup::Unconfigured | Lookup::Unavailable => 0.3,
        Lookup::Found(metadata) => {
            let mut score: Score = 0.8;
            if !metadata.tags.is_empty() {
                score += 0.1;
            }
            if metadata.has_card {
                score += 0.1;
            }
            score.min(1.0)
        }
    }
}
