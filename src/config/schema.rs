//! Configuration schema types
//!
//! This module defines the configuration structure for Hemodash.

use serde::{Deserialize, Serialize};
use url::Url;

/// Main Hemodash configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HemodashConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Dashboard API connection settings
    pub api: ApiConfig,

    /// Retry policy for fetch cycles
    #[serde(default)]
    pub retry: RetryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HemodashConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.api.validate()?;
        self.retry.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Dashboard API connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the dashboard API
    pub base_url: String,

    /// Per-call deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Skip TLS certificate validation (self-signed deployments)
    #[serde(default)]
    pub tls_accept_invalid_certs: bool,

    /// Serve the demo dataset without touching the network
    #[serde(default)]
    pub force_offline: bool,

    /// Restrict the centers listing to one wilaya (None fetches all)
    #[serde(default)]
    pub wilaya_id: Option<u32>,

    /// Page size for the centers listing
    #[serde(default = "default_pagination_take")]
    pub pagination_take: u32,

    /// Page offset for the centers listing
    #[serde(default)]
    pub pagination_skip: u32,
}

impl ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("api.base_url must not be empty".to_string());
        }
        if Url::parse(&self.base_url).is_err() {
            return Err(format!("api.base_url is not a valid URL: {}", self.base_url));
        }
        if self.timeout_ms == 0 {
            return Err("api.timeout_ms must be greater than zero".to_string());
        }
        if self.pagination_take == 0 {
            return Err("api.pagination_take must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_ms: default_timeout_ms(),
            tls_accept_invalid_certs: false,
            force_offline: false,
            wilaya_id: None,
            pagination_take: default_pagination_take(),
            pagination_skip: 0,
        }
    }
}

/// Retry policy for fetch cycles
///
/// Retries apply to the whole resource batch of a cycle, not to individual
/// resources; a single failing resource re-fetches the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt (2 means 3 attempts total)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub delay_ms: u64,
}

impl RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_retries > 10 {
            return Err("retry.max_retries must be 10 or less".to_string());
        }
        Ok(())
    }

    /// Total attempts a cycle may perform
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a rotating local file
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy: daily or hourly
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must not be empty when local logging is enabled"
                .to_string());
        }
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_pagination_take() -> u32 {
    50
}

fn default_max_retries() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    2_000
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> HemodashConfig {
        HemodashConfig {
            application: ApplicationConfig::default(),
            api: ApiConfig {
                base_url: "https://api.example.dz".to_string(),
                ..Default::default()
            },
            retry: RetryConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_defaults_match_observed_policy() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_retries, 2);
        assert_eq!(retry.max_attempts(), 3);
        assert_eq!(retry.delay_ms, 2_000);

        let api = ApiConfig::default();
        assert_eq!(api.timeout_ms, 10_000);
        assert_eq!(api.pagination_take, 50);
        assert!(!api.force_offline);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = valid_config();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = valid_config();
        config.api.base_url = "not a url".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.contains("not a valid URL"));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let mut config = valid_config();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.api.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_excessive_retries_rejected() {
        let mut config = valid_config();
        config.retry.max_retries = 11;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "https://api.example.dz"
force_offline = true
wilaya_id = 16
"#;
        let config: HemodashConfig = toml::from_str(toml_str).unwrap();
        assert!(config.api.force_offline);
        assert_eq!(config.api.wilaya_id, Some(16));
        assert_eq!(config.application.log_level, "info");
        assert!(config.validate().is_ok());
    }
}
