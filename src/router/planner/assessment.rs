use crate::engine::condition::{ConditionEvaluator, ConditionOutcome};
use crate::engine::types::{ExecutionContext, SubQuery};

/// A sub-query with the outcome of each of its conditions, in condition
/// order. Conditions are assessed once per invocation.
#[derive(Debug, Clone)]
pub struct AssessedQuery {
    pub query: SubQuery,
    pub outcomes: Vec<ConditionOutcome>,
}

impl AssessedQuery {
    pub fn assess(query: SubQuery, evaluator: &ConditionEvaluator, ctx: &ExecutionContext) -> Self {
        let outcomes = query
            .conditions
            .iter()
            .map(|condition| evaluator.assess(condition, ctx))
            .collect();
        Self { query, outcomes }
    }

    pub fn field_outcomes(&self) -> impl Iterator<Item = &ConditionOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_field())
    }

    pub fn has_bound_field(&self) -> bool {
        self.outcomes.iter().any(ConditionOutcome::is_bound_field)
    }

    pub fn unmet_count(&self) -> u32 {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_satisfied())
            .count() as u32
    }
}
