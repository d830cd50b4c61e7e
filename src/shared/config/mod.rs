mod global;
mod model;

#[cfg(test)]
mod model_test;

pub use global::CONFIG;
pub use model::{LoggingConfig, RouterSettings, Settings, load_settings};
