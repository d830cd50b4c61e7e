mod concurrent;
mod group;
mod traits;


pub use concurrent::ConcurrentGroupDispatcher;
pub use group::GroupTask;
pub use traits::GroupDispatch;
