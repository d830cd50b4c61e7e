use rand::{Rng, distributions::Alphanumeric};

use crate::engine::condition::ConditionEvaluator;
use crate::engine::types::ExecutionContext;
use crate::shared::config::RouterSettings;

/// Per-invocation state shared by the planning stages.
pub struct RouteContext<'a> {
    pub exec: &'a ExecutionContext,
    pub evaluator: &'a ConditionEvaluator,
    pub settings: &'a RouterSettings,
    pub request_id: String,
}

impl<'a> RouteContext<'a> {
    pub fn new(
        exec: &'a ExecutionContext,
        evaluator: &'a ConditionEvaluator,
        settings: &'a RouterSettings,
    ) -> Self {
        let request_id = exec.request_id.clone().unwrap_or_else(generate_request_id);
        Self {
            exec,
            evaluator,
            settings,
            request_id,
        }
    }

    /// Request id of the backend request issued for group `index`.
    pub fn group_request_id(&self, index: usize) -> String {
        group_key(&self.settings.key_prefix, index, &self.request_id)
    }
}

/// `{prefix}-{index}-{suffix}`; the index keeps keys from concurrently
/// running groups apart.
pub fn group_key(prefix: &str, index: usize, suffix: &str) -> String {
    format!("{}-{}-{}", prefix, index, suffix)
}

fn generate_request_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
