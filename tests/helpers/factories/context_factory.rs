use crate::engine::condition::builtin::VALUE_CLICK;
use crate::engine::types::{ExecutionContext, TimeWindow, VariableBinding};
use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value as JsonValue, json};

pub struct ContextFactory {
    span: Duration,
    variables: Vec<VariableBinding>,
    request_id: Option<String>,
}

impl ContextFactory {
    pub fn new() -> Self {
        Self {
            span: Duration::hours(6),
            variables: Vec::new(),
            request_id: None,
        }
    }

    pub fn with_span(mut self, span: Duration) -> Self {
        self.span = span;
        self
    }

    pub fn with_binding(mut self, id: &str, name: &str, value: impl Into<JsonValue>) -> Self {
        self.variables.push(VariableBinding::new(id, name, value));
        self
    }

    /// A binding whose id matches a field the user just clicked.
    pub fn clicked_field(self, field_id: &str) -> Self {
        self.with_binding(field_id, &format!("click_{}", field_id), json!("value"))
    }

    /// The sticky binding left behind by a satisfied `valueClick` condition.
    pub fn sticky_click(self, pattern: &str) -> Self {
        let name = format!("{}_{}", VALUE_CLICK, pattern);
        self.with_binding("sticky", &name, json!("value"))
    }

    pub fn with_request_id(mut self, request_id: &str) -> Self {
        self.request_id = Some(request_id.to_string());
        self
    }

    pub fn create(self) -> ExecutionContext {
        let to = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        let mut ctx = ExecutionContext::new(TimeWindow::new(to - self.span, to));
        ctx.variables = self.variables;
        ctx.request_id = self.request_id;
        ctx
    }
}
