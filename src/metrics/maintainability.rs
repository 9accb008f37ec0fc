use crate::registry::Lookup;
use crate::types::scoring::Score;

pub const FAILURE_SCORE: Score = 0.0;

pub fn maintainability_score(lookup: &Lookup) -> Score {
    match lookup {
        Lookup::Unconfigured => 0.5,
        Lookup::Unavailable => 0.2,
        Lookup::Found(metadata) => {
            let mut score: Score = 0.3;
            if metadata.last_modified.is_some() {
                score += 0.3;
            }
            if metadata.has_card {
                score += 0.2;
            }
            if !metadata.tags.is_empty() {
                score += 0.2;
            }
            score.min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Metadata;
    use chrono::Utc;

    #[test]
    fn bonuses_accumulate_per_signal() {
        let mut metadata = Metadata::default();
        assert_eq!(maintainability_score(&Lookup::Found(metadata.clone())), 0.3);

        metadata.last_modified = Some(Utc::now());
        assert!((maintainability_score(&Lookup::Found(metadata.clone())) - 0.6).abs() < 1e-9);

        metadata.has_card = true;
        metadata.tags.insert("vision".to_string());
        assert!((maintainability_score(&Lookup::Found(metadata)) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fallbacks_differ_between_unconfigured_and_unavailable() {
        assert_eq!(maintainability_score(&Lookup::Unconfigured), 0.5);
        assert_eq!(maintainability_score(&Lookup::Unavailable), 0.2);
    }
}
