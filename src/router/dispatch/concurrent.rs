use async_trait::async_trait;
use futures::future::join_all;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::group::GroupTask;
use super::traits::GroupDispatch;
use crate::engine::errors::BackendError;
use crate::engine::types::ResponseChunk;

/// Runs each group on its own tokio task and joins them all before
/// returning. Groups never share state; a failing or slow group only
/// affects its own slot.
pub struct ConcurrentGroupDispatcher {
    cancel_grace: Duration,
}

impl ConcurrentGroupDispatcher {
    pub fn new(cancel_grace: Duration) -> Self {
        Self { cancel_grace }
    }
}

struct PendingGroup {
    index: usize,
    backend: String,
    error_key: String,
    handle: JoinHandle<Option<Vec<ResponseChunk>>>,
}

#[async_trait]
impl GroupDispatch for ConcurrentGroupDispatcher {
    async fn dispatch(
        &self,
        tasks: Vec<GroupTask>,
        cancel: CancellationToken,
    ) -> Vec<Vec<ResponseChunk>> {
        let pending: Vec<PendingGroup> = tasks
            .into_iter()
            .map(|task| {
                let index = task.group.index;
                let backend = task.group.backend.display_name().to_string();
                let error_key = task.request_id.clone();
                let token = cancel.clone();
                let handle = tokio::spawn(async move {
                    tokio::select! {
                        biased;
                        _ = token.cancelled() => None,
                        chunks = task.run() => Some(chunks),
                    }
                });
                PendingGroup {
                    index,
                    backend,
                    error_key,
                    handle,
                }
            })
            .collect();

        let grace = self.cancel_grace;
        join_all(
            pending
                .into_iter()
                .map(|group| join_group(group, cancel.clone(), grace)),
        )
        .await
    }
}

async fn join_group(
    mut group: PendingGroup,
    cancel: CancellationToken,
    grace: Duration,
) -> Vec<ResponseChunk> {
    let joined = tokio::select! {
        joined = &mut group.handle => joined,
        _ = async {
            cancel.cancelled().await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(
                target: "query_router::dispatch",
                group = group.index,
                grace_ms = grace.as_millis() as u64,
                "Group did not stop within cancellation grace period, aborting"
            );
            group.handle.abort();
            return Vec::new();
        }
    };

    match joined {
        Ok(Some(chunks)) => chunks,
        Ok(None) => {
            debug!(target: "query_router::dispatch", group = group.index, "Group cancelled");
            Vec::new()
        }
        Err(join_err) if join_err.is_cancelled() => Vec::new(),
        Err(join_err) => {
            let err = BackendError::TaskFailed(join_err.to_string());
            err.log_error(&group.backend);
            vec![ResponseChunk::error(group.error_key, &group.backend, &err)]
        }
    }
}
