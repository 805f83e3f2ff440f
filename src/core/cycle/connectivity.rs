//! Connectivity state reporting
//!
//! One [`ConnectivityState`] value is produced per fetch cycle and returned
//! to the caller alongside the snapshot. It is never mutated in place: each
//! cycle replaces the whole value, so consumers can't observe a partially
//! updated state.

use serde::Serialize;

/// How the latest cycle obtained its data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectivityState {
    /// The last cycle reached the live API
    pub is_online: bool,
    /// The snapshot came from the demo dataset
    pub using_fallback: bool,
    /// Display string of the last failure, if any
    pub last_error: Option<String>,
}

impl ConnectivityState {
    /// Live data fetched successfully
    pub fn live() -> Self {
        Self {
            is_online: true,
            using_fallback: false,
            last_error: None,
        }
    }

    /// Demo data served by policy (forced offline mode)
    pub fn demo() -> Self {
        Self {
            is_online: true,
            using_fallback: true,
            last_error: None,
        }
    }

    /// Demo data substituted after retry exhaustion
    pub fn offline(cause: impl Into<String>) -> Self {
        Self {
            is_online: false,
            using_fallback: true,
            last_error: Some(cause.into()),
        }
    }

    /// Non-fatal banner text for presentation, if one should be shown
    pub fn banner(&self) -> Option<String> {
        if !self.using_fallback {
            return None;
        }
        match &self.last_error {
            Some(cause) => Some(format!("API Error: {cause}")),
            None => Some("Using demo data. API connection unavailable.".to_string()),
        }
    }
}

impl Default for ConnectivityState {
    fn default() -> Self {
        Self::live()
    }
}
