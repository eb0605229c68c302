//! Configuration for index-view.
//!
//! - Typed sections with defaults ([`AppConfig`])
//! - Validation collecting every problem at once ([`Validatable`])
//! - YAML config file loading and discovery ([`file`])
//! - CLI override merging
//!
//! # Configuration File
//!
//! Place a `.index-view.yaml` file in your project root or `~/.config/index-view/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//!   default_per_page: 25
//! labels:
//!   of: of
//!   page: Page
//! notifications:
//!   enabled: true
//!   feed: notifications.json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_JITTER_RATIO, DEFAULT_MAX_BACKOFF_SECS, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_THEME,
    DEFAULT_TICK_RATE_MS, THEME_NAMES,
};
pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default,
};
pub use types::{AppConfig, AppConfigBuilder, NotificationConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

/// JSON Schema of the config file format, for editor validation.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| crate::error::IndexViewError::config(format!("schema serialization: {e}")))
}
