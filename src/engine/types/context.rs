use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::shared::time::{TimeParseError, TimeParser};

/// The raw (unparsed) time window as the caller expressed it, e.g.
/// `now-6h` / `now`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeWindow {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub raw: RawTimeWindow,
}

impl TimeWindow {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            from,
            to,
            raw: RawTimeWindow {
                from: from.to_rfc3339(),
                to: to.to_rfc3339(),
            },
        }
    }

    /// Resolves a raw window against `now`.
    pub fn parse(from: &str, to: &str, now: DateTime<Utc>) -> Result<Self, TimeParseError> {
        let from_ts = TimeParser::parse_instant(from, now)?;
        let to_ts = TimeParser::parse_instant(to, now)?;
        Ok(Self {
            from: from_ts,
            to: to_ts,
            raw: RawTimeWindow {
                from: from.to_string(),
                to: to.to_string(),
            },
        })
    }

    /// A window ending now and covering the last `span`.
    pub fn last(span: Duration) -> Self {
        let to = Utc::now();
        Self::new(to - span, to)
    }

    /// Length of the window; never negative.
    pub fn span(&self) -> Duration {
        let span = self.to - self.from;
        if span < Duration::zero() {
            Duration::zero()
        } else {
            span
        }
    }
}

/// A dynamically bound value, typically produced by a previous user
/// interaction, that conditions may test against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableBinding {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub current_value: JsonValue,
}

impl VariableBinding {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        current_value: impl Into<JsonValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_value: current_value.into(),
        }
    }

    /// A binding counts as set when its value is neither null nor empty.
    pub fn is_set(&self) -> bool {
        match &self.current_value {
            JsonValue::Null => false,
            JsonValue::String(s) => !s.is_empty(),
            JsonValue::Array(items) => !items.is_empty(),
            JsonValue::Object(map) => !map.is_empty(),
            JsonValue::Bool(_) | JsonValue::Number(_) => true,
        }
    }
}

/// Per-invocation routing input. Never mutated by the router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionContext {
    pub time_window: TimeWindow,
    #[serde(default)]
    pub variables: Vec<VariableBinding>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub scoped_vars: Map<String, JsonValue>,
}

impl ExecutionContext {
    pub fn new(time_window: TimeWindow) -> Self {
        Self {
            time_window,
            variables: Vec::new(),
            request_id: None,
            scoped_vars: Map::new(),
        }
    }

    pub fn with_variable(mut self, binding: VariableBinding) -> Self {
        self.variables.push(binding);
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Finds a set binding by name.
    pub fn binding_named(&self, name: &str) -> Option<&VariableBinding> {
        self.variables
            .iter()
            .find(|binding| binding.name == name && binding.is_set())
    }

    pub fn set_bindings(&self) -> impl Iterator<Item = &VariableBinding> {
        self.variables.iter().filter(|binding| binding.is_set())
    }
}
