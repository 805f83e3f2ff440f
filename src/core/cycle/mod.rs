//! Fetch cycle orchestration
//!
//! A cycle fetches every dashboard resource concurrently, retries the batch
//! on failure, and falls back to the bundled demo dataset when the retry
//! budget is exhausted. The connectivity state produced alongside each
//! snapshot tells consumers which of the three sources they are looking at:
//! live data, forced demo data, or fallback after an error.

pub mod connectivity;
pub mod orchestrator;

pub use connectivity::ConnectivityState;
pub use orchestrator::{CycleOutcome, Orchestrator};
