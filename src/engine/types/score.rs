use std::fmt;

use super::query::SubQuery;

/// Unmet-condition count of a sub-query. `None` means the query has nothing
/// to score (the default query). Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score(Option<u32>);

impl Score {
    pub const UNSCORED: Score = Score(None);

    pub fn unmet(count: u32) -> Self {
        Score(Some(count))
    }

    pub fn value(&self) -> Option<u32> {
        self.0
    }

    pub fn is_defined(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("undefined"),
        }
    }
}

/// A sub-query paired with its score so filtering between scoring and
/// selection cannot misalign the two.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredQuery {
    pub query: SubQuery,
    pub score: Score,
}

impl ScoredQuery {
    pub fn new(query: SubQuery, score: Score) -> Self {
        Self { query, score }
    }
}
