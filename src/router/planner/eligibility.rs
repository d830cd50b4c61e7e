use tracing::debug;

use super::assessment::AssessedQuery;

/// Removes sub-queries that must not run in the current context.
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// - A query with field conditions is eligible only when all of them are
    ///   satisfied (directly or through their binding).
    /// - A default query is eligible unless some query has a field condition
    ///   satisfied through an existing binding (a drill-down is active).
    /// - Queries gated only by time-range conditions stay eligible; the
    ///   scorer ranks them.
    pub fn apply(assessed: Vec<AssessedQuery>) -> Vec<AssessedQuery> {
        let drill_down_active = assessed.iter().any(AssessedQuery::has_bound_field);

        assessed
            .into_iter()
            .filter(|candidate| {
                let eligible = if candidate.query.is_default() {
                    !drill_down_active
                } else {
                    candidate.field_outcomes().all(|outcome| outcome.is_satisfied())
                };
                if !eligible {
                    debug!(
                        target: "query_router::select",
                        ref_id = %candidate.query.ref_id,
                        "Sub-query not eligible"
                    );
                }
                eligible
            })
            .collect()
    }
}
