use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::engine::backend::{
    BackendClient, BackendRequest, BackendResolver, ChunkStream, StaticBackendResolver,
};
use crate::engine::errors::BackendError;
use crate::engine::types::{BackendChunk, BackendRef, Frame, LoadingState};

/// Scripted backend client recording every request it receives.
pub struct MockBackend {
    name: String,
    chunks: Vec<Result<BackendChunk, BackendError>>,
    delay: Option<Duration>,
    query_error: Option<BackendError>,
    requests: Mutex<Vec<BackendRequest>>,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<BackendRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl BackendClient for MockBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn query(&self, request: BackendRequest) -> Result<ChunkStream, BackendError> {
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = &self.query_error {
            return Err(err.clone());
        }
        Ok(stream::iter(self.chunks.clone()).boxed())
    }
}

pub struct BackendFactory {
    name: String,
    chunks: Vec<Result<BackendChunk, BackendError>>,
    delay: Option<Duration>,
    query_error: Option<BackendError>,
}

impl BackendFactory {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            chunks: Vec::new(),
            delay: None,
            query_error: None,
        }
    }

    /// Adds a chunk holding one frame named `frame`.
    pub fn with_frame(mut self, key: &str, frame: &str) -> Self {
        self.chunks
            .push(Ok(BackendChunk::keyed(key, vec![Frame::named(frame)])));
        self
    }

    pub fn with_streaming_frame(mut self, key: &str, frame: &str) -> Self {
        self.chunks.push(Ok(BackendChunk::keyed(key, vec![Frame::named(frame)])
            .with_state(LoadingState::Streaming)));
        self
    }

    pub fn with_stream_error(mut self, message: &str) -> Self {
        self.chunks
            .push(Err(BackendError::Execution(message.to_string())));
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.query_error = Some(BackendError::Execution(message.to_string()));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn create(self) -> Arc<MockBackend> {
        Arc::new(MockBackend {
            name: self.name,
            chunks: self.chunks,
            delay: self.delay,
            query_error: self.query_error,
            requests: Mutex::new(Vec::new()),
        })
    }
}

/// Wraps a static resolver and counts resolution attempts.
#[derive(Default)]
pub struct CountingResolver {
    inner: StaticBackendResolver,
    resolutions: AtomicUsize,
}

impl CountingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backend(self, uid: &str, backend: Arc<MockBackend>) -> Self {
        self.inner.insert(uid, backend);
        self
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackendResolver for CountingResolver {
    async fn resolve(&self, backend: &BackendRef) -> Result<Arc<dyn BackendClient>, BackendError> {
        self.resolutions.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(backend).await
    }
}
