//! Logging and observability
//!
//! Structured logging with JSON-formatted file output, configurable log
//! levels, and local file rotation.
//!
//! # Example
//!
//! ```no_run
//! use hemodash::logging::init_logging;
//! use hemodash::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a fetch cycle
///
/// # Example
///
/// ```no_run
/// use hemodash::log_cycle_start;
///
/// log_cycle_start!(5);
/// ```
#[macro_export]
macro_rules! log_cycle_start {
    ($resources:expr) => {
        tracing::info!(resources = $resources, "Starting fetch cycle");
    };
}

/// Log the completion of a fetch cycle
///
/// # Example
///
/// ```no_run
/// use hemodash::log_cycle_complete;
/// use std::time::Duration;
///
/// let duration = Duration::from_secs(1);
/// log_cycle_complete!(false, duration);
/// ```
#[macro_export]
macro_rules! log_cycle_complete {
    ($using_fallback:expr, $duration:expr) => {
        tracing::info!(
            using_fallback = $using_fallback,
            duration_ms = $duration.as_millis(),
            "Fetch cycle completed"
        );
    };
}

/// Log a retry attempt
///
/// # Example
///
/// ```no_run
/// use hemodash::log_retry_attempt;
///
/// log_retry_attempt!(2, 3, "Connection timeout");
/// ```
#[macro_export]
macro_rules! log_retry_attempt {
    ($attempt:expr, $max_attempts:expr, $reason:expr) => {
        tracing::warn!(
            attempt = $attempt,
            max_attempts = $max_attempts,
            reason = $reason,
            "Retrying operation"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use hemodash::log_error_with_context;
/// use hemodash::domain::HemodashError;
///
/// let error = HemodashError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
