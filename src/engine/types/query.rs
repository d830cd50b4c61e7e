use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// A typed predicate attached to a sub-query. The behavior behind `type_id`
/// is looked up in the condition registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub type_id: String,
    #[serde(default)]
    pub options: Map<String, JsonValue>,
}

impl Condition {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
            options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Returns a string option, if present.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(JsonValue::as_str)
    }
}

/// Identifies the backend a sub-query targets. Only `uid` takes part in
/// grouping; `name` is a display hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackendRef {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl BackendRef {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: None,
        }
    }

    pub fn named(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: Some(name.into()),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.uid)
    }
}

impl fmt::Display for BackendRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One candidate query. A sub-query without conditions is the default query
/// of its logical group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubQuery {
    pub ref_id: String,
    pub backend: BackendRef,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub hidden: bool,
    /// Backend-native query body, passed through untouched.
    #[serde(default)]
    pub payload: JsonValue,
}

impl SubQuery {
    pub fn new(ref_id: impl Into<String>, backend: BackendRef) -> Self {
        Self {
            ref_id: ref_id.into(),
            backend,
            conditions: Vec::new(),
            hidden: false,
            payload: JsonValue::Null,
        }
    }

    pub fn is_default(&self) -> bool {
        self.conditions.is_empty()
    }

    /// True when every condition of `self` appears in `other` and `other`
    /// carries strictly more distinct conditions.
    pub fn is_strictly_less_specific_than(&self, other: &SubQuery) -> bool {
        let mine = distinct(&self.conditions);
        let theirs = distinct(&other.conditions);
        mine.len() < theirs.len() && mine.iter().all(|c| theirs.contains(c))
    }
}

fn distinct(conditions: &[Condition]) -> Vec<&Condition> {
    let mut out: Vec<&Condition> = Vec::with_capacity(conditions.len());
    for condition in conditions {
        if !out.contains(&condition) {
            out.push(condition);
        }
    }
    out
}
