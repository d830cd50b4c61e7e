use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub router: RouterSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouterSettings {
    /// Prefix of group request ids and chunk keys (`{prefix}-{index}-...`).
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// How long a cancelled invocation waits for in-flight groups before
    /// aborting them.
    #[serde(default = "default_cancel_grace_ms")]
    pub cancel_grace_ms: u64,
    /// Optional per-group deadline; expiry fails only that group.
    #[serde(default)]
    pub group_timeout_ms: Option<u64>,
}

impl RouterSettings {
    pub fn cancel_grace(&self) -> Duration {
        Duration::from_millis(self.cancel_grace_ms)
    }

    pub fn group_timeout(&self) -> Option<Duration> {
        self.group_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            key_prefix: default_key_prefix(),
            cancel_grace_ms: default_cancel_grace_ms(),
            group_timeout_ms: None,
        }
    }
}

fn default_key_prefix() -> String {
    "mixed".to_string()
}

fn default_cancel_grace_ms() -> u64 {
    250
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("QUERY_ROUTER_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .add_source(
            config::Environment::with_prefix("QUERY_ROUTER")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
