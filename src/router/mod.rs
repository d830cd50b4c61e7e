mod context;
pub mod dispatch;
pub mod merge;
mod orchestrator;
pub mod planner;
mod stream;

#[cfg(test)]
mod context_test;

pub use context::{RouteContext, group_key};
pub use orchestrator::RoutePipeline;
pub use planner::RoutePlan;
pub use stream::ResponseStream;
