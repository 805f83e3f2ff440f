//! Domain models and types for Hemodash.
//!
//! This module contains the raw record types mirrored from the dashboard
//! API, the closed code enumerations the crate owns, and the error types.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Code enumerations** ([`BloodGroup`], [`Priority`], [`RequestStatus`], ...)
//!   with an explicit `Unknown(code)` variant instead of string lookup tables
//! - **Raw records** ([`DashboardStats`], [`BloodRequest`], [`Donor`],
//!   [`Center`], [`Wilaya`]) with every nested field optional
//! - **Error types** ([`HemodashError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, HemodashError>`]:
//!
//! ```rust
//! use hemodash::domain::{HemodashError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = hemodash::config::load_config("hemodash.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! # Semi-trusted input
//!
//! Raw records are deserialized leniently: a missing or null field is an
//! `Option::None`, a missing collection is empty, and an unknown enum code
//! is carried verbatim. Nothing in this layer can make a fetch cycle fail
//! because of payload shape alone.

pub mod enums;
pub mod errors;
pub mod records;
pub mod result;

// Re-export commonly used types for convenience
pub use enums::{Availability, BloodGroup, ContactMethod, DonationType, Priority, RequestStatus};
pub use errors::{FetchError, HemodashError};
pub use records::{
    BloodRequest, Center, CenterRef, Commune, DashboardStats, Donor, InventoryItem, OrderedMap,
    RawSnapshot, StockSummary, Wilaya,
};
pub use result::Result;
