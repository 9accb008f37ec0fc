use crate::types::scoring::{round_to, Score, ScoreCard, WEIGHTS};

pub fn net_score(card: &ScoreCard) -> Score {
    let weighted: Score = WEIGHTS
        .iter()
        .map(|(metric, weight)| card.get(*metric).score * weight)
        .sum();
    round_to(weighted, 3).clamp(0.0, 1.0)
}
