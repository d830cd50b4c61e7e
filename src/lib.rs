pub mod engine;
pub mod logging;
pub mod router;
pub mod shared;

pub use engine::backend::{BackendClient, BackendRequest, BackendResolver, StaticBackendResolver};
pub use engine::condition::{ConditionBehavior, ConditionClass, ConditionRegistry};
pub use engine::types::{
    BackendRef, Condition, ExecutionContext, LoadingState, ResponseChunk, SubQuery, TimeWindow,
    VariableBinding,
};
pub use router::{ResponseStream, RoutePipeline};

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
