use chrono::Duration;
use serde_json::{Map, Value as JsonValue};

use crate::engine::condition::behavior::{ConditionBehavior, ConditionClass};
use crate::engine::errors::ConditionError;
use crate::engine::types::ExecutionContext;
use crate::shared::time::TimeParser;

pub const TIME_RANGE_INTERVAL: &str = "timeRangeInterval";

/// Satisfied while the active time window spans at most `options.interval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRangeIntervalCondition;

impl TimeRangeIntervalCondition {
    pub fn interval(options: &Map<String, JsonValue>) -> Result<Duration, ConditionError> {
        let invalid = |reason: String| ConditionError::InvalidOptions {
            type_id: TIME_RANGE_INTERVAL.to_string(),
            reason,
        };
        let raw = options
            .get("interval")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| invalid("missing string option 'interval'".to_string()))?;
        TimeParser::parse_interval(raw).map_err(|err| invalid(err.to_string()))
    }
}

impl ConditionBehavior for TimeRangeIntervalCondition {
    fn type_id(&self) -> &str {
        TIME_RANGE_INTERVAL
    }

    fn class(&self) -> ConditionClass {
        ConditionClass::TimeRange
    }

    fn evaluate(&self, options: &Map<String, JsonValue>, ctx: &ExecutionContext) -> bool {
        match Self::interval(options) {
            Ok(interval) => ctx.time_window.span() <= interval,
            Err(err) => {
                err.log_error();
                false
            }
        }
    }

    fn variable_name(&self, options: &Map<String, JsonValue>) -> String {
        let interval = options
            .get("interval")
            .and_then(JsonValue::as_str)
            .unwrap_or_default();
        format!("{}_{}", TIME_RANGE_INTERVAL, interval)
    }
}
