use tracing::debug;

use crate::engine::types::{LoadingState, ResponseChunk};

/// Concatenates per-group chunk sequences in group order and finalizes the
/// terminal loading state.
pub struct ResponseMerger;

impl ResponseMerger {
    pub fn merge(groups: Vec<Vec<ResponseChunk>>) -> Vec<ResponseChunk> {
        let merged: Vec<ResponseChunk> = groups.into_iter().flatten().collect();
        Self::finalize(merged)
    }

    /// - empty stays empty
    /// - any error: the first error chunk is repeated at the end
    /// - otherwise only the last chunk becomes `Done`
    pub fn finalize(mut chunks: Vec<ResponseChunk>) -> Vec<ResponseChunk> {
        if chunks.is_empty() {
            return chunks;
        }

        if let Some(error) = chunks.iter().find(|chunk| chunk.is_error()).cloned() {
            debug!(
                target: "query_router::merge",
                key = %error.key,
                chunks = chunks.len(),
                "Appending terminal error chunk"
            );
            chunks.push(error);
            return chunks;
        }

        if let Some(last) = chunks.last_mut() {
            last.state = LoadingState::Done;
        }
        chunks
    }
}
