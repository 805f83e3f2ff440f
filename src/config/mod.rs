//! Configuration management for Hemodash.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Hemodash uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`HEMODASH_*` prefix)
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hemodash::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration from file
//! let config = load_config("hemodash.toml")?;
//!
//! // Access configuration sections
//! println!("API URL: {}", config.api.base_url);
//! println!("Retries: {}", config.retry.max_retries);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [api]
//! base_url = "https://api.transfusion.example.dz"
//! timeout_ms = 10000
//! force_offline = false
//!
//! [retry]
//! max_retries = 2
//! delay_ms = 2000
//!
//! [logging]
//! local_enabled = false
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used items
pub use loader::load_config;
pub use schema::{ApiConfig, ApplicationConfig, HemodashConfig, LoggingConfig, RetryConfig};
