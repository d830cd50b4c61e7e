use futures::stream::{self, BoxStream, Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio_util::sync::CancellationToken;

use crate::engine::types::ResponseChunk;

/// Merged output of one routing invocation. Dropping the stream, or
/// calling `cancel`, cancels every in-flight group.
pub struct ResponseStream {
    inner: BoxStream<'static, ResponseChunk>,
    cancel: CancellationToken,
}

impl ResponseStream {
    pub(crate) fn new(inner: BoxStream<'static, ResponseChunk>, cancel: CancellationToken) -> Self {
        Self { inner, cancel }
    }

    pub fn empty() -> Self {
        Self::new(stream::empty().boxed(), CancellationToken::new())
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn collect_all(self) -> Vec<ResponseChunk> {
        self.collect().await
    }
}

impl Stream for ResponseStream {
    type Item = ResponseChunk;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}
