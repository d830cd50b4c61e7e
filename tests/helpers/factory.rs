pub use super::factories::{BackendFactory, ContextFactory, SubQueryFactory};

pub struct Factory;

impl Factory {
    pub fn sub_query(ref_id: &str) -> SubQueryFactory {
        SubQueryFactory::new(ref_id)
    }

    pub fn context() -> ContextFactory {
        ContextFactory::new()
    }

    pub fn backend(name: &str) -> BackendFactory {
        BackendFactory::new(name)
    }
}
