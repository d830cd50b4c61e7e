use serde_json::{Map, Value as JsonValue};
use std::fmt::Debug;

use crate::engine::types::ExecutionContext;

/// Whether a condition gates on interactively bound variables or on the
/// active time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionClass {
    Field,
    TimeRange,
}

/// Behavior registered for a condition type id.
pub trait ConditionBehavior: Send + Sync + Debug {
    fn type_id(&self) -> &str;

    fn class(&self) -> ConditionClass;

    /// Is the condition currently satisfied by `ctx`?
    fn evaluate(&self, options: &Map<String, JsonValue>, ctx: &ExecutionContext) -> bool;

    /// Deterministic name of the variable that records a previous
    /// satisfaction of this condition.
    fn variable_name(&self, options: &Map<String, JsonValue>) -> String;
}
