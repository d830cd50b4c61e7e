pub mod backend;
pub mod condition;
pub mod errors;
pub mod types;

pub use errors::*;
