use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use crate::engine::backend::{BackendClient, BackendRequest, BackendResolver};
use crate::engine::errors::BackendError;
use crate::engine::types::{ExecutionContext, ResponseChunk};
use crate::router::context::group_key;
use crate::router::planner::BatchGroup;

/// Everything one group needs to run on its own task.
pub struct GroupTask {
    pub group: BatchGroup,
    pub request_id: String,
    pub key_prefix: String,
    pub timeout: Option<Duration>,
    pub resolver: Arc<dyn BackendResolver>,
    pub exec: Arc<ExecutionContext>,
}

impl GroupTask {
    /// Resolves the backend, runs the group's request and maps the native
    /// stream to re-keyed `Loading` or `Streaming` chunks. Any failure
    /// collapses the group's output into a single error chunk.
    pub async fn run(self) -> Vec<ResponseChunk> {
        let index = self.group.index;
        let fallback_name = self.group.backend.display_name().to_string();
        let error_key = self.request_id.clone();

        let outcome = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, self.execute()).await {
                Ok(outcome) => outcome,
                Err(_) => Err((fallback_name, BackendError::Timeout(limit.as_millis() as u64))),
            },
            None => self.execute().await,
        };

        match outcome {
            Ok(chunks) => {
                debug!(
                    target: "query_router::dispatch",
                    group = index,
                    chunks = chunks.len(),
                    "Group completed"
                );
                chunks
            }
            Err((backend, err)) => {
                err.log_error(&backend);
                vec![ResponseChunk::error(error_key, &backend, &err)]
            }
        }
    }

    async fn execute(self) -> Result<Vec<ResponseChunk>, (String, BackendError)> {
        let GroupTask {
            group,
            request_id,
            key_prefix,
            resolver,
            exec,
            ..
        } = self;

        let client: Arc<dyn BackendClient> = resolver
            .resolve(&group.backend)
            .await
            .map_err(|err| (group.backend.display_name().to_string(), err))?;
        let backend = client.name().to_string();

        info!(
            target: "query_router::dispatch",
            group = group.index,
            backend = %backend,
            request_id = %request_id,
            queries = group.queries.len(),
            "Dispatching group to backend"
        );

        let request = BackendRequest::for_group(request_id, group.queries, &exec);
        let mut stream = client
            .query(request)
            .await
            .map_err(|err| (backend.clone(), err))?;

        let mut chunks = Vec::new();
        while let Some(item) = stream.next().await {
            let native = item.map_err(|err| (backend.clone(), err))?;
            let key = group_key(&key_prefix, group.index, native.key.as_deref().unwrap_or(""));
            let state = native.response_state();
            chunks.push(ResponseChunk::loading(key, native.data).with_state(state));
        }
        Ok(chunks)
    }
}
