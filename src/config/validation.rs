//! Configuration validation.

use super::defaults::THEME_NAMES;
use super::types::{AppConfig, NotificationConfig, TuiConfig};
use crate::table::{Labels, PER_PAGE_OPTIONS};

/// One invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// Dotted path of the offending field
    pub field: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning every error found.
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.labels.validate());
        errors.extend(self.notifications.validate());
        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !THEME_NAMES.contains(&self.theme.to_lowercase().as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Unknown theme '{}'. Valid options: {}",
                    self.theme,
                    THEME_NAMES.join(", ")
                ),
            ));
        }
        if !PER_PAGE_OPTIONS.contains(&self.default_per_page) {
            let options: Vec<String> = PER_PAGE_OPTIONS.iter().map(ToString::to_string).collect();
            errors.push(ConfigError::new(
                "tui.default_per_page",
                format!(
                    "Per-page must be one of {}, got {}",
                    options.join(", "),
                    self.default_per_page
                ),
            ));
        }
        if self.tick_rate_ms < 16 {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!("Tick rate must be at least 16ms, got {}", self.tick_rate_ms),
            ));
        }
        errors
    }
}

impl Validatable for Labels {
    fn validate(&self) -> Vec<ConfigError> {
        [
            ("labels.of", &self.of),
            ("labels.page", &self.page),
            ("labels.per_page", &self.per_page),
            ("labels.no_data", &self.no_data),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| ConfigError::new(field, "Label must not be empty"))
        .collect()
    }
}

impl Validatable for NotificationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.poll_interval_secs == 0 {
            errors.push(ConfigError::new(
                "notifications.poll_interval_secs",
                "Poll interval must be greater than 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.jitter_ratio) {
            errors.push(ConfigError::new(
                "notifications.jitter_ratio",
                format!(
                    "Jitter must be between 0.0 and 1.0, got {}",
                    self.jitter_ratio
                ),
            ));
        }
        if self.enabled && self.feed.is_none() {
            errors.push(ConfigError::new(
                "notifications.feed",
                "A feed file is required when notifications are enabled",
            ));
        }
        errors
    }
}
