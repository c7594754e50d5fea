//! Configuration loading — an optional TOML document with defaults.
//!
//! The page may embed a `<script type="application/toml">` block; every
//! field has a sensible default so the block is optional and may be partial.

use std::time::Duration;

use pyropanel_domain::chart::DEFAULT_CHART_CAPACITY;
use pyropanel_domain::notification::NotificationTiming;
use serde::Deserialize;

use crate::realtime::ReconnectPolicy;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// HTTP API settings.
    pub api: ApiConfig,
    /// Push channel settings.
    pub realtime: RealtimeConfig,
    /// Notification timings.
    pub notifications: NotificationConfig,
    /// Resource chart settings.
    pub chart: ChartConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path prefix of the backend API (e.g. `/api`).
    pub base_path: String,
}

/// Push channel configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Path of the push endpoint on the page's host.
    pub path: String,
    /// Fixed delay between a close and the next connection attempt.
    pub reconnect_delay_ms: u64,
}

/// Notification configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Time a notification stays fully visible.
    pub visible_ms: u64,
    /// Duration of the fade-out before removal.
    pub fade_ms: u64,
}

/// Resource chart configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of points kept in the rolling buffer.
    pub capacity: usize,
    /// Id of the `<canvas>` the chart is drawn on, if the page has one.
    pub canvas_id: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level written to the console (`error` … `trace`).
    pub level: String,
}

impl DashboardConfig {
    /// Load configuration from an optional TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation.
    pub fn load(source: Option<&str>) -> Result<Self, ConfigError> {
        let config = match source {
            Some(text) => toml::from_str(text)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("api.base_path", &self.api.base_path),
            ("realtime.path", &self.realtime.path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Validation(format!("{name} must start with '/'")));
            }
        }
        if self.realtime.reconnect_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "realtime.reconnect_delay_ms must be non-zero".to_string(),
            ));
        }
        if self.chart.capacity == 0 {
            return Err(ConfigError::Validation(
                "chart.capacity must be non-zero".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    /// Parsed logging level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an unknown level name.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|_| ConfigError::Validation(format!("unknown log level '{}'", self.logging.level)))
    }

    #[must_use]
    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            visible: Duration::from_millis(self.notifications.visible_ms),
            fade: Duration::from_millis(self.notifications.fade_ms),
        }
    }

    /// A fresh, uncancelled reconnect policy using the configured delay.
    #[must_use]
    pub fn reconnect_policy(&self) -> ReconnectPolicy {
        ReconnectPolicy::fixed(Duration::from_millis(self.realtime.reconnect_delay_ms))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
        }
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            path: "/ws".to_string(),
            reconnect_delay_ms: 5000,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        let timing = NotificationTiming::default();
        Self {
            visible_ms: u64::try_from(timing.visible.as_millis()).unwrap_or(u64::MAX),
            fade_ms: u64::try_from(timing.fade.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHART_CAPACITY,
            canvas_id: "resource-chart".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse dashboard config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api.base_path, "/api");
        assert_eq!(config.realtime.path, "/ws");
        assert_eq!(config.realtime.reconnect_delay_ms, 5000);
        assert_eq!(config.notifications.visible_ms, 5000);
        assert_eq!(config.notifications.fade_ms, 300);
        assert_eq!(config.chart.capacity, 20);
        assert_eq!(config.chart.canvas_id, "resource-chart");
        assert_eq!(config.log_level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn should_use_defaults_without_source() {
        let config = DashboardConfig::load(None).unwrap();
        assert_eq!(config.notification_timing(), NotificationTiming::default());
        assert_eq!(
            config.reconnect_policy().next_delay(),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_path = '/panel/api'

            [realtime]
            path = '/live'
            reconnect_delay_ms = 2500

            [notifications]
            visible_ms = 3000
            fade_ms = 150

            [chart]
            capacity = 60
            canvas_id = 'cpu-mem'

            [logging]
            level = 'debug'
        ";
        let config = DashboardConfig::load(Some(toml)).unwrap();
        assert_eq!(config.api.base_path, "/panel/api");
        assert_eq!(config.realtime.path, "/live");
        assert_eq!(config.realtime.reconnect_delay_ms, 2500);
        assert_eq!(config.notification_timing().lifetime(), Duration::from_millis(3150));
        assert_eq!(config.chart.capacity, 60);
        assert_eq!(config.chart.canvas_id, "cpu-mem");
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config = DashboardConfig::load(Some("[chart]\ncapacity = 5")).unwrap();
        assert_eq!(config.chart.capacity, 5);
        assert_eq!(config.realtime.path, "/ws");
        assert_eq!(config.notifications.visible_ms, 5000);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result = DashboardConfig::load(Some("invalid {{{"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_relative_paths() {
        let result = DashboardConfig::load(Some("[realtime]\npath = 'ws'"));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_zero_capacity_and_delay() {
        assert!(DashboardConfig::load(Some("[chart]\ncapacity = 0")).is_err());
        assert!(DashboardConfig::load(Some("[realtime]\nreconnect_delay_ms = 0")).is_err());
    }

    #[test]
    fn should_reject_unknown_log_level() {
        let result = DashboardConfig::load(Some("[logging]\nlevel = 'loud'"));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
