//! Dashboard API adapter
//!
//! This module wraps the remote HTTP+JSON API behind the [`DataSource`]
//! trait. The adapter performs exactly one network call per invocation,
//! under a hard deadline, and classifies every failure into a
//! [`crate::domain::FetchError`]. Retry and fallback policy live in the
//! orchestrator, never here.

pub mod client;
pub mod resource;
pub mod source;

pub use client::HttpDataSource;
pub use resource::Resource;
pub use source::DataSource;
