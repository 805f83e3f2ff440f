//! Core pipeline: fetch cycles, derived metrics, view model assembly

pub mod cycle;
pub mod metrics;
pub mod viewmodel;

pub use cycle::{ConnectivityState, CycleOutcome, Orchestrator};
pub use viewmodel::{build_view_model, build_view_model_at, ViewModel};
