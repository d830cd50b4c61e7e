use async_trait::async_trait;
use futures::stream::BoxStream;
use std::sync::Arc;

use super::request::BackendRequest;
use crate::engine::errors::BackendError;
use crate::engine::types::{BackendChunk, BackendRef};

/// Native response stream of a backend.
pub type ChunkStream = BoxStream<'static, Result<BackendChunk, BackendError>>;

/// A resolved backend able to execute a batch of sub-queries.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Display name used to qualify error messages.
    fn name(&self) -> &str;

    async fn query(&self, request: BackendRequest) -> Result<ChunkStream, BackendError>;
}

/// Resolves a backend reference to a client.
#[async_trait]
pub trait BackendResolver: Send + Sync {
    async fn resolve(&self, backend: &BackendRef) -> Result<Arc<dyn BackendClient>, BackendError>;
}
