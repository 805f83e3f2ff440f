//! External integrations
//!
//! This module contains the adapters between Hemodash and the outside
//! world: the dashboard API client and the offline fallback dataset.

pub mod api;
pub mod fallback;
