// Hemodash - Blood Transfusion Network Dashboard
// Copyright (c) 2026 Hemodash Contributors
// Licensed under the MIT License

//! Hemodash fetches operational data from a national blood-transfusion
//! network API and derives the metrics behind its admin dashboard: stock
//! health, request and donor distributions, regional performance, and an
//! alert feed.
//!
//! The pipeline is resilient by construction: every resource is fetched
//! concurrently, failures retry the whole batch, and when the retry budget
//! is exhausted a bundled demo dataset stands in so consumers always get a
//! complete snapshot.
//!
//! # Example
//!
//! ```no_run
//! use hemodash::adapters::api::Resource;
//! use hemodash::config::load_config;
//! use hemodash::core::cycle::Orchestrator;
//! use hemodash::core::viewmodel::build_view_model;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = load_config("hemodash.toml")?;
//! let orchestrator = Orchestrator::from_config(&config)?;
//!
//! let resources = Resource::full_set(&config.api);
//! let outcome = orchestrator.run_cycle(&resources).await;
//! let view = build_view_model(&outcome.snapshot, outcome.connectivity);
//!
//! println!("{}", serde_json::to_string_pretty(&view)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
