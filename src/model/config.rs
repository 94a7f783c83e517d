use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration from todo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON fixture loaded into the store at startup
    #[serde(default)]
    pub fixture: Option<PathBuf>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Pause between confirming a list delete and returning home
    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u64,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Theme overrides, keyed by theme slot name, values as "#RRGGBB"
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            delete_delay_ms: default_delete_delay_ms(),
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log file; logging is off when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// EnvFilter directive, e.g. "info" or "todolist=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delete_delay_ms() -> u64 {
    450
}

fn default_log_level() -> String {
    "info".to_string()
}
