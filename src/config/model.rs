//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

use crate::ui::theme::ThemeKind;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used at startup. Toggling at runtime is not written back.
    #[serde(default)]
    pub theme: ThemeKind,
    /// Show the wall-clock time a running countdown will finish at.
    #[serde(default = "default_true")]
    pub show_end_time: bool,
    #[serde(default = "default_end_time_format")]
    pub end_time_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            show_end_time: true,
            end_time_format: default_end_time_format(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Length of one countdown tick in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// Default filter directive. `RUST_LOG` takes precedence.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_end_time_format() -> String {
    "%H:%M:%S".to_string()
}
fn default_tick_millis() -> u64 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/crabtimer/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
