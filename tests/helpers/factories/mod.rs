pub mod backend_factory;
pub mod context_factory;
pub mod sub_query_factory;

pub use backend_factory::{BackendFactory, CountingResolver, MockBackend};
pub use context_factory::ContextFactory;
pub use sub_query_factory::SubQueryFactory;
