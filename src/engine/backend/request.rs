use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::engine::types::{ExecutionContext, SubQuery, TimeWindow};

/// One backend-level request carrying every sub-query of a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendRequest {
    pub request_id: String,
    pub queries: Vec<SubQuery>,
    pub time_window: TimeWindow,
    pub scoped_vars: Map<String, JsonValue>,
}

impl BackendRequest {
    pub fn for_group(request_id: String, queries: Vec<SubQuery>, ctx: &ExecutionContext) -> Self {
        Self {
            request_id,
            queries,
            time_window: ctx.time_window.clone(),
            scoped_vars: ctx.scoped_vars.clone(),
        }
    }

    pub fn ref_ids(&self) -> impl Iterator<Item = &str> {
        self.queries.iter().map(|query| query.ref_id.as_str())
    }
}
