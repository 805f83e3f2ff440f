//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::HemodashConfig;
use crate::domain::errors::HemodashError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`HemodashConfig`]
/// 4. Applies environment variable overrides (`HEMODASH_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use hemodash::config::load_config;
///
/// let config = load_config("hemodash.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<HemodashConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(HemodashError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        HemodashError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: HemodashConfig = toml::from_str(&contents)
        .map_err(|e| HemodashError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        HemodashError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(HemodashError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `HEMODASH_*` prefix
///
/// Environment variables follow the pattern `HEMODASH_<SECTION>_<KEY>`,
/// for example `HEMODASH_API_BASE_URL` or `HEMODASH_RETRY_MAX_RETRIES`.
fn apply_env_overrides(config: &mut HemodashConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("HEMODASH_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // API overrides
    if let Ok(val) = std::env::var("HEMODASH_API_BASE_URL") {
        config.api.base_url = val;
    }
    if let Ok(val) = std::env::var("HEMODASH_API_TIMEOUT_MS") {
        if let Ok(timeout) = val.parse() {
            config.api.timeout_ms = timeout;
        }
    }
    if let Ok(val) = std::env::var("HEMODASH_API_FORCE_OFFLINE") {
        config.api.force_offline = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HEMODASH_API_TLS_ACCEPT_INVALID_CERTS") {
        config.api.tls_accept_invalid_certs = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HEMODASH_API_WILAYA_ID") {
        config.api.wilaya_id = val.parse().ok();
    }
    if let Ok(val) = std::env::var("HEMODASH_API_PAGINATION_TAKE") {
        if let Ok(take) = val.parse() {
            config.api.pagination_take = take;
        }
    }

    // Retry overrides
    if let Ok(val) = std::env::var("HEMODASH_RETRY_MAX_RETRIES") {
        if let Ok(retries) = val.parse() {
            config.retry.max_retries = retries;
        }
    }
    if let Ok(val) = std::env::var("HEMODASH_RETRY_DELAY_MS") {
        if let Ok(delay) = val.parse() {
            config.retry.delay_ms = delay;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("HEMODASH_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("HEMODASH_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
