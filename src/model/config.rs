use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from daybook/config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tasks: TaskConfig,
    #[serde(default)]
    pub notes: NotesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub show_key_hints: bool,
    /// Theme overrides, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Days (counting today) that make up the "This Week" section
    #[serde(default = "default_week_days")]
    pub week_days: i64,
}

impl Default for TaskConfig {
    fn default() -> Self {
        TaskConfig {
            week_days: default_week_days(),
        }
    }
}

fn default_week_days() -> i64 {
    7
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Slug of the note the notes view opens on
    #[serde(default)]
    pub home: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `DAYBOOK_LOG` overrides it
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
