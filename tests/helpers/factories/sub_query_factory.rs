use crate::engine::condition::builtin::{TIME_RANGE_INTERVAL, VALUE_CLICK};
use crate::engine::types::{BackendRef, Condition, SubQuery};
use serde_json::json;

pub struct SubQueryFactory {
    query: SubQuery,
}

impl SubQueryFactory {
    pub fn new(ref_id: &str) -> Self {
        Self {
            query: SubQuery::new(ref_id, BackendRef::named("prom", "Prometheus")),
        }
    }

    pub fn on(mut self, uid: &str) -> Self {
        self.query.backend = BackendRef::new(uid);
        self
    }

    pub fn on_named(mut self, uid: &str, name: &str) -> Self {
        self.query.backend = BackendRef::named(uid, name);
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.query.conditions.push(condition);
        self
    }

    pub fn value_click(self, pattern: &str) -> Self {
        self.with_condition(Condition::new(VALUE_CLICK).with_option("pattern", pattern))
    }

    pub fn time_range(self, interval: &str) -> Self {
        self.with_condition(Condition::new(TIME_RANGE_INTERVAL).with_option("interval", interval))
    }

    pub fn hidden(mut self) -> Self {
        self.query.hidden = true;
        self
    }

    pub fn with_expr(mut self, expr: &str) -> Self {
        self.query.payload = json!({ "expr": expr });
        self
    }

    pub fn create(self) -> SubQuery {
        self.query
    }
}
