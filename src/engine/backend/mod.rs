mod request;
mod static_resolver;
mod traits;


pub use request::BackendRequest;
pub use static_resolver::StaticBackendResolver;
pub use traits::{BackendClient, BackendResolver, ChunkStream};
