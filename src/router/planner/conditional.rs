use tracing::debug;

use super::assessment::AssessedQuery;
use super::eligibility::EligibilityFilter;
use super::grouper::BatchGrouper;
use super::plan_outcome::RoutePlan;
use super::scorer::QueryScorer;
use super::selection::SelectionResolver;
use crate::engine::types::SubQuery;
use crate::router::context::RouteContext;

/// Runs filter → score → select → group. Pure over its inputs.
pub struct ConditionalPlanner;

impl ConditionalPlanner {
    pub fn new() -> Self {
        Self
    }

    pub fn build_plan(&self, ctx: &RouteContext<'_>, queries: Vec<SubQuery>) -> RoutePlan {
        let candidates = queries.len();
        let assessed: Vec<AssessedQuery> = queries
            .into_iter()
            .filter(|query| !query.hidden)
            .map(|query| AssessedQuery::assess(query, ctx.evaluator, ctx.exec))
            .collect();

        let eligible = EligibilityFilter::apply(assessed);
        let scored = QueryScorer::score(eligible);
        for entry in &scored {
            debug!(
                target: "query_router::select",
                ref_id = %entry.query.ref_id,
                score = %entry.score,
                "Scored sub-query"
            );
        }

        let selected = SelectionResolver::resolve(scored);
        let groups = BatchGrouper::group(selected);
        let plan = RoutePlan { groups };

        debug!(
            target: "query_router::select",
            request_id = %ctx.request_id,
            candidates,
            selected = plan.query_count(),
            groups = plan.groups.len(),
            "Built route plan"
        );
        plan
    }
}

impl Default for ConditionalPlanner {
    fn default() -> Self {
        Self::new()
    }
}
