mod context;
mod query;
mod response;
mod score;

#[cfg(test)]
mod types_test;

pub use context::{ExecutionContext, RawTimeWindow, TimeWindow, VariableBinding};
pub use query::{BackendRef, Condition, SubQuery};
pub use response::{BackendChunk, ChunkError, Frame, LoadingState, ResponseChunk};
pub use score::{Score, ScoredQuery};
