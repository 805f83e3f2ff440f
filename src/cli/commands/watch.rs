//! Watch command implementation
//!
//! This module implements the `watch` command: run fetch cycles on a fixed
//! interval, printing a one-line summary per cycle, until a shutdown signal
//! arrives.

use crate::adapters::api::Resource;
use crate::config::load_config;
use crate::core::cycle::Orchestrator;
use crate::core::viewmodel::build_view_model;
use clap::Args;
use std::time::{Duration, Instant};
use tokio::sync::watch;

/// Arguments for the watch command
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Seconds between fetch cycles
    #[arg(long, default_value_t = 30)]
    pub interval_secs: u64,

    /// Serve the demo dataset without contacting the API
    #[arg(long)]
    pub offline: bool,
}

impl WatchArgs {
    /// Execute the watch command
    ///
    /// Runs until `shutdown_signal` flips to `true`. The cycle in flight
    /// when the signal arrives completes and is reported before exit.
    pub async fn execute(
        &self,
        config_path: &str,
        mut shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!(interval_secs = self.interval_secs, "Starting watch command");

        let mut config = load_config(config_path)?;
        if self.offline {
            config.api.force_offline = true;
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
        let interval = Duration::from_secs(self.interval_secs.max(1));

        loop {
            let started = Instant::now();
            crate::log_cycle_start!(resources.len());

            let outcome = orchestrator.run_cycle(&resources).await;
            crate::log_cycle_complete!(outcome.connectivity.using_fallback, started.elapsed());

            let view = build_view_model(&outcome.snapshot, outcome.connectivity.clone());

            let status = match outcome.connectivity.banner() {
                Some(banner) => format!("⚠️  {banner}"),
                None => "✅ live".to_string(),
            };
            println!(
                "{} | donors: {} | requests: {} | centers: {} | stock: {} | alerts: {} ({} high)",
                status,
                view.total_donors,
                view.total_blood_requests,
                view.total_blood_centers,
                view.total_stock,
                view.alerts.len(),
                view.high_alert_count(),
            );

            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown_signal.changed() => {
                    if *shutdown_signal.borrow() {
                        tracing::info!("Shutdown signal received, stopping watch loop");
                        println!("Watch stopped.");
                        return Ok(0);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_args_defaults() {
        let args = WatchArgs {
            interval_secs: 30,
            offline: false,
        };
        assert_eq!(args.interval_secs, 30);
        assert!(!args.offline);
    }
}
