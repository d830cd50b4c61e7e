use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::engine::types::ResponseChunk;

use super::group::GroupTask;

/// Strategy for running a set of group tasks and collecting their chunks
/// in group order.
#[async_trait]
pub trait GroupDispatch: Send + Sync {
    async fn dispatch(
        &self,
        tasks: Vec<GroupTask>,
        cancel: CancellationToken,
    ) -> Vec<Vec<ResponseChunk>>;
}
