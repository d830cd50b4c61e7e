use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::warn;

use crate::shared::config::model::{Settings, load_settings};

pub static CONFIG: Lazy<Arc<Settings>> = Lazy::new(|| {
    let settings = load_settings().unwrap_or_else(|err| {
        warn!(target: "query_router::config", error = %err, "Falling back to default settings");
        Settings::default()
    });
    Arc::new(settings)
});
