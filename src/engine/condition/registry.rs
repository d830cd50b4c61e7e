use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::behavior::ConditionBehavior;
use super::builtin::{TimeRangeIntervalCondition, ValueClickCondition};
use crate::engine::errors::ConditionError;

/// Immutable lookup table from condition type id to behavior.
#[derive(Debug, Clone, Default)]
pub struct ConditionRegistry {
    behaviors: HashMap<String, Arc<dyn ConditionBehavior>>,
}

impl ConditionRegistry {
    pub fn builder() -> ConditionRegistryBuilder {
        ConditionRegistryBuilder::default()
    }

    /// Registry holding only the built-in condition types.
    pub fn with_builtins() -> Self {
        let behaviors = builtin_behaviors()
            .into_iter()
            .map(|behavior| (behavior.type_id().to_string(), behavior))
            .collect();
        Self { behaviors }
    }

    pub fn get(&self, type_id: &str) -> Result<Arc<dyn ConditionBehavior>, ConditionError> {
        self.behaviors
            .get(type_id)
            .cloned()
            .ok_or_else(|| ConditionError::UnknownType(type_id.to_string()))
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.behaviors.contains_key(type_id)
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &String> {
        self.behaviors.keys()
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ConditionRegistryBuilder {
    behaviors: HashMap<String, Arc<dyn ConditionBehavior>>,
}

impl ConditionRegistryBuilder {
    pub fn register(
        &mut self,
        behavior: Arc<dyn ConditionBehavior>,
    ) -> Result<&mut Self, ConditionError> {
        let type_id = behavior.type_id().to_string();
        if self.behaviors.contains_key(&type_id) {
            return Err(ConditionError::AlreadyRegistered(type_id));
        }
        self.behaviors.insert(type_id, behavior);
        Ok(self)
    }

    pub fn register_builtins(&mut self) -> Result<&mut Self, ConditionError> {
        for behavior in builtin_behaviors() {
            self.register(behavior)?;
        }
        Ok(self)
    }

    pub fn build(self) -> ConditionRegistry {
        ConditionRegistry {
            behaviors: self.behaviors,
        }
    }
}

fn builtin_behaviors() -> Vec<Arc<dyn ConditionBehavior>> {
    vec![
        Arc::new(ValueClickCondition),
        Arc::new(TimeRangeIntervalCondition),
    ]
}

static GLOBAL_CONDITION_REGISTRY: Lazy<RwLock<Arc<ConditionRegistry>>> =
    Lazy::new(|| RwLock::new(Arc::new(ConditionRegistry::with_builtins())));

/// Snapshot of the process-wide registry. Callers hold the `Arc` for the
/// duration of a routing call, so routing never takes the lock.
pub fn global() -> Arc<ConditionRegistry> {
    GLOBAL_CONDITION_REGISTRY.read().clone()
}

/// Replaces the process-wide registry. Snapshots already handed out keep
/// seeing the previous registry.
pub fn reinitialize(registry: ConditionRegistry) {
    info!(
        target: "query_router::condition",
        types = registry.len(),
        "Reinitializing global condition registry"
    );
    *GLOBAL_CONDITION_REGISTRY.write() = Arc::new(registry);
}
