use super::assessment::AssessedQuery;
use crate::engine::types::{Score, ScoredQuery};

/// Scores eligible sub-queries by their number of unmet conditions.
pub struct QueryScorer;

impl QueryScorer {
    pub fn score(assessed: Vec<AssessedQuery>) -> Vec<ScoredQuery> {
        assessed
            .into_iter()
            .map(|candidate| {
                let score = if candidate.query.is_default() {
                    Score::UNSCORED
                } else {
                    Score::unmet(candidate.unmet_count())
                };
                ScoredQuery::new(candidate.query, score)
            })
            .collect()
    }
}
