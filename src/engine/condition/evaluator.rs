use std::sync::Arc;
use tracing::trace;

use super::behavior::ConditionClass;
use super::registry::ConditionRegistry;
use crate::engine::types::{Condition, ExecutionContext};

/// Result of checking one condition against a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionOutcome {
    /// `None` when the condition type is not registered.
    pub class: Option<ConditionClass>,
    /// `evaluate` returned true.
    pub direct: bool,
    /// A set binding named after the condition's variable exists.
    pub bound: bool,
}

impl ConditionOutcome {
    const UNKNOWN: ConditionOutcome = ConditionOutcome {
        class: None,
        direct: false,
        bound: false,
    };

    /// Field conditions are satisfied directly or through their sticky
    /// binding; time-range conditions only directly.
    pub fn is_satisfied(&self) -> bool {
        match self.class {
            Some(ConditionClass::Field) => self.direct || self.bound,
            Some(ConditionClass::TimeRange) => self.direct,
            None => false,
        }
    }

    pub fn is_field(&self) -> bool {
        self.class == Some(ConditionClass::Field)
    }

    pub fn is_bound_field(&self) -> bool {
        self.is_field() && self.bound
    }
}

/// Stateless evaluation of conditions through a registry snapshot.
#[derive(Debug, Clone)]
pub struct ConditionEvaluator {
    registry: Arc<ConditionRegistry>,
}

impl ConditionEvaluator {
    pub fn new(registry: Arc<ConditionRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<ConditionRegistry> {
        &self.registry
    }

    /// Is `condition` currently satisfied? Unknown types are logged and
    /// count as unsatisfied.
    pub fn evaluate(&self, condition: &Condition, ctx: &ExecutionContext) -> bool {
        self.assess(condition, ctx).is_satisfied()
    }

    pub fn assess(&self, condition: &Condition, ctx: &ExecutionContext) -> ConditionOutcome {
        let behavior = match self.registry.get(&condition.type_id) {
            Ok(behavior) => behavior,
            Err(err) => {
                err.log_error();
                return ConditionOutcome::UNKNOWN;
            }
        };

        let direct = behavior.evaluate(&condition.options, ctx);
        let variable = behavior.variable_name(&condition.options);
        let bound = ctx.binding_named(&variable).is_some();

        trace!(
            target: "query_router::condition",
            type_id = %condition.type_id,
            variable = %variable,
            direct,
            bound,
            "Assessed condition"
        );

        ConditionOutcome {
            class: Some(behavior.class()),
            direct,
            bound,
        }
    }
}
