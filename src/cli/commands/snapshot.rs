//! Snapshot command implementation
//!
//! This module implements the `snapshot` command: run one fetch cycle,
//! assemble the dashboard view model, and emit it as JSON.

use crate::adapters::api::Resource;
use crate::config::load_config;
use crate::core::cycle::Orchestrator;
use crate::core::viewmodel::build_view_model;
use clap::Args;
use std::fs;

/// Arguments for the snapshot command
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the view model to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Serve the demo dataset without contacting the API
    #[arg(long)]
    pub offline: bool,

    /// Override the wilaya filter for the centers resource
    #[arg(long)]
    pub wilaya_id: Option<u32>,
}

impl SnapshotArgs {
    /// Execute the snapshot command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting snapshot command");

        let mut config = load_config(config_path)?;

        if self.offline {
            tracing::info!("Enabling offline mode from CLI");
            config.api.force_offline = true;
        }
        if let Some(wilaya_id) = self.wilaya_id {
            tracing::info!(wilaya_id, "Overriding wilaya filter from CLI");
            config.api.wilaya_id = Some(wilaya_id);
        }

        let orchestrator = match Orchestrator::from_config(&config) {
            Ok(o) => o,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build HTTP client");
                eprintln!("Failed to initialize fetch pipeline: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let resources = Resource::full_set(&config.api);
        let outcome = orchestrator.run_cycle(&resources).await;

        if let Some(banner) = outcome.connectivity.banner() {
            eprintln!("⚠️  {banner}");
        }

        let view = build_view_model(&outcome.snapshot, outcome.connectivity.clone());

        let json = if self.pretty {
            serde_json::to_string_pretty(&view)?
        } else {
            serde_json::to_string(&view)?
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &json)?;
                println!("✅ Snapshot written to {path}");
            }
            None => println!("{json}"),
        }

        // Fallback data is a deliverable, but signal degradation
        let exit_code = if outcome.connectivity.is_online { 0 } else { 1 };
        Ok(exit_code)
    }
}
