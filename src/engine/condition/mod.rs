pub mod behavior;
pub mod builtin;
pub mod evaluator;
pub mod registry;


pub use behavior::{ConditionBehavior, ConditionClass};
pub use evaluator::{ConditionEvaluator, ConditionOutcome};
pub use registry::{ConditionRegistry, ConditionRegistryBuilder};
