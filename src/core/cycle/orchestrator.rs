//! Retrying fetch orchestrator
//!
//! The orchestrator runs one fetch cycle: fan out every requested resource
//! concurrently, retry the whole batch on any failure, and substitute the
//! demo dataset once the retry budget is spent. Downstream code always
//! receives a structurally complete snapshot; no raw fetch error crosses
//! this boundary.
//!
//! Retries are batch-wide on purpose: one failing resource re-fetches the
//! entire batch, reproducing the dashboard's observed behavior.

use crate::adapters::api::{DataSource, HttpDataSource, Resource};
use crate::adapters::fallback;
use crate::config::{HemodashConfig, RetryConfig};
use crate::core::cycle::connectivity::ConnectivityState;
use crate::domain::records::{
    CentersEnvelope, DonorsEnvelope, RequestsEnvelope, StatsEnvelope, WilayasEnvelope,
};
use crate::domain::{FetchError, HemodashError, RawSnapshot, Result};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Result of one fetch cycle
///
/// The snapshot and the connectivity state are produced together and
/// published together; consumers never see one without the other.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub snapshot: RawSnapshot,
    pub connectivity: ConnectivityState,
}

/// Runs fetch cycles against a data source
pub struct Orchestrator {
    source: Arc<dyn DataSource>,
    retry: RetryConfig,
    force_offline: bool,
}

impl Orchestrator {
    /// Create an orchestrator over an explicit data source
    pub fn new(source: Arc<dyn DataSource>, retry: RetryConfig, force_offline: bool) -> Self {
        Self {
            source,
            retry,
            force_offline,
        }
    }

    /// Create an orchestrator with the HTTP adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &HemodashConfig) -> Result<Self> {
        let source = Arc::new(HttpDataSource::new(&config.api)?);
        Ok(Self::new(
            source,
            config.retry.clone(),
            config.api.force_offline,
        ))
    }

    /// Run one full fetch cycle
    ///
    /// Never fails: retry exhaustion falls back to the demo dataset and is
    /// reported through the returned [`ConnectivityState`].
    pub async fn run_cycle(&self, resources: &[Resource]) -> CycleOutcome {
        if self.force_offline {
            tracing::info!("Offline mode forced, serving demo dataset");
            return CycleOutcome {
                snapshot: fallback::demo_snapshot(),
                connectivity: ConnectivityState::demo(),
            };
        }

        match self.fetch_batch(resources).await {
            Ok(snapshot) => CycleOutcome {
                snapshot,
                connectivity: ConnectivityState::live(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Fetch cycle exhausted, serving demo dataset");
                CycleOutcome {
                    snapshot: fallback::demo_snapshot(),
                    connectivity: ConnectivityState::offline(match err {
                        HemodashError::Exhausted { cause, .. } => cause,
                        other => other.to_string(),
                    }),
                }
            }
        }
    }

    /// Fetch the batch with the configured retry policy
    ///
    /// Exposed separately from [`run_cycle`](Self::run_cycle) so callers
    /// that want the raw exhaustion error (instead of the fallback) can
    /// observe it.
    pub async fn fetch_batch(&self, resources: &[Resource]) -> Result<RawSnapshot> {
        let max_attempts = self.retry.max_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.attempt_batch(resources).await {
                Ok(snapshot) => {
                    if attempt > 1 {
                        tracing::info!(attempt, "Fetch cycle recovered after retry");
                    }
                    return Ok(snapshot);
                }
                Err(err) => {
                    if attempt >= max_attempts {
                        return Err(HemodashError::Exhausted {
                            attempts: attempt,
                            cause: err.to_string(),
                        });
                    }
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = %err,
                        "Retrying fetch cycle after error"
                    );
                    tokio::time::sleep(Duration::from_millis(self.retry.delay_ms)).await;
                }
            }
        }
    }

    /// One attempt: fan out every resource, await them jointly
    async fn attempt_batch(
        &self,
        resources: &[Resource],
    ) -> std::result::Result<RawSnapshot, FetchError> {
        let calls = resources.iter().map(|resource| {
            let source = Arc::clone(&self.source);
            async move { (resource, source.fetch(resource).await) }
        });

        let results = futures::future::join_all(calls).await;

        let mut snapshot = RawSnapshot::empty();
        let mut first_error: Option<FetchError> = None;

        for (resource, result) in results {
            match result {
                Ok(payload) => {
                    if let Err(err) = merge_payload(&mut snapshot, resource, payload) {
                        first_error.get_or_insert(err);
                    }
                }
                Err(err) => {
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            // Batch-wide policy: any failure invalidates the whole attempt
            Some(err) => Err(err),
            None => Ok(snapshot),
        }
    }
}

/// Decode one payload into its slot of the snapshot
///
/// A missing envelope key is an empty collection; only a payload whose
/// shape contradicts the schema is a decode failure.
fn merge_payload(
    snapshot: &mut RawSnapshot,
    resource: &Resource,
    payload: Value,
) -> std::result::Result<(), FetchError> {
    let decode_err = |e: serde_json::Error| FetchError::Decode {
        resource: resource.name().to_string(),
        message: e.to_string(),
    };

    match resource {
        Resource::Stats => {
            let envelope: StatsEnvelope = serde_json::from_value(payload).map_err(decode_err)?;
            snapshot.stats = envelope.stats;
        }
        Resource::Requests => {
            let envelope: RequestsEnvelope = serde_json::from_value(payload).map_err(decode_err)?;
            snapshot.requests = envelope.blood_donation_requests;
        }
        Resource::Centers { .. } => {
            let envelope: CentersEnvelope = serde_json::from_value(payload).map_err(decode_err)?;
            snapshot.centers = envelope.centers;
        }
        Resource::Wilayas => {
            let envelope: WilayasEnvelope = serde_json::from_value(payload).map_err(decode_err)?;
            snapshot.wilayas = envelope.wilayas;
        }
        Resource::Donors => {
            let envelope: DonorsEnvelope = serde_json::from_value(payload).map_err(decode_err)?;
            snapshot.donors = envelope.users;
        }
    }
    Ok(())
}
