use tracing::debug;

use crate::engine::types::{ScoredQuery, SubQuery};

/// Picks the runnable sub-queries from the scored set.
pub struct SelectionResolver;

impl SelectionResolver {
    /// Order of the input is preserved in the output.
    pub fn resolve(scored: Vec<ScoredQuery>) -> Vec<SubQuery> {
        let Some(min_score) = scored.iter().filter_map(|s| s.score.value()).min() else {
            // nothing scored: every eligible query runs
            return scored.into_iter().map(|s| s.query).collect();
        };

        let has_default = scored.iter().any(|s| !s.score.is_defined());
        if min_score > 0 && has_default {
            debug!(
                target: "query_router::select",
                min_score,
                "No fully satisfied conditional query, falling back to default queries"
            );
            return scored
                .into_iter()
                .filter(|s| !s.score.is_defined())
                .map(|s| s.query)
                .collect();
        }

        let tied: Vec<SubQuery> = scored
            .into_iter()
            .filter(|s| s.score.value() == Some(min_score))
            .map(|s| s.query)
            .collect();

        Self::most_specific(tied)
    }

    /// Drops every query whose condition set is strictly contained in
    /// another tied query's set. Containment is transitive, so a nested
    /// chain keeps only its widest member.
    fn most_specific(tied: Vec<SubQuery>) -> Vec<SubQuery> {
        let keep: Vec<bool> = tied
            .iter()
            .map(|candidate| {
                !tied
                    .iter()
                    .any(|other| candidate.is_strictly_less_specific_than(other))
            })
            .collect();

        tied.into_iter()
            .zip(keep)
            .filter_map(|(query, keep)| {
                if !keep {
                    debug!(
                        target: "query_router::select",
                        ref_id = %query.ref_id,
                        "Sub-query superseded by a more specific one"
                    );
                }
                keep.then_some(query)
            })
            .collect()
    }
}
