use regex::Regex;
use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::engine::condition::behavior::{ConditionBehavior, ConditionClass};
use crate::engine::errors::ConditionError;
use crate::engine::types::ExecutionContext;

pub const VALUE_CLICK: &str = "valueClick";

/// Satisfied once the user has clicked a value of a field whose id matches
/// `options.pattern`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueClickCondition;

impl ValueClickCondition {
    pub fn pattern(options: &Map<String, JsonValue>) -> Result<&str, ConditionError> {
        options
            .get("pattern")
            .and_then(JsonValue::as_str)
            .filter(|pattern| !pattern.is_empty())
            .ok_or_else(|| ConditionError::InvalidOptions {
                type_id: VALUE_CLICK.to_string(),
                reason: "missing or empty string option 'pattern'".to_string(),
            })
    }
}

impl ConditionBehavior for ValueClickCondition {
    fn type_id(&self) -> &str {
        VALUE_CLICK
    }

    fn class(&self) -> ConditionClass {
        ConditionClass::Field
    }

    fn evaluate(&self, options: &Map<String, JsonValue>, ctx: &ExecutionContext) -> bool {
        let pattern = match Self::pattern(options) {
            Ok(pattern) => pattern,
            Err(err) => {
                err.log_error();
                return false;
            }
        };

        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(re) => ctx.set_bindings().any(|binding| re.is_match(&binding.id)),
            Err(err) => {
                warn!(
                    target: "query_router::condition",
                    pattern,
                    error = %err,
                    "Invalid valueClick pattern, matching literally"
                );
                ctx.set_bindings().any(|binding| binding.id == pattern)
            }
        }
    }

    fn variable_name(&self, options: &Map<String, JsonValue>) -> String {
        let pattern: String = Self::pattern(options)
            .unwrap_or_default()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        format!("{}_{}", VALUE_CLICK, pattern)
    }
}
