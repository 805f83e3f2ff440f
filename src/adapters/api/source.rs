//! Data source trait definition
//!
//! [`DataSource`] abstracts one remote call so the orchestrator can run
//! against the real HTTP client in production and against scripted stubs
//! in tests. An implementation must be pure from the orchestrator's point
//! of view: no shared state beyond the call itself.

use super::resource::Resource;
use crate::domain::FetchError;
use async_trait::async_trait;
use serde_json::Value;

/// One remote call under a deadline
///
/// Returns the parsed JSON payload or a classified [`FetchError`]. The
/// envelope (top-level collection key) is interpreted by the orchestrator,
/// not here; a payload that is valid JSON but missing the expected key is
/// a success with an empty collection downstream.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch one resource
    async fn fetch(&self, resource: &Resource) -> Result<Value, FetchError>;
}
