//! HTTP data source backed by reqwest
//!
//! One [`HttpDataSource`] wraps a configured reqwest client. Every call is
//! bounded by the configured deadline twice over: the client's own timeout
//! and an outer `tokio::time::timeout`, so a stalled body read can't hold a
//! cycle open past its budget.

use super::resource::Resource;
use super::source::DataSource;
use crate::config::ApiConfig;
use crate::domain::{FetchError, HemodashError, Result};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;

/// Remote data source adapter for the dashboard API
pub struct HttpDataSource {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpDataSource {
    /// Create a new adapter from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.timeout_ms);

        let mut client_builder = ClientBuilder::new()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30));

        // Pilot deployments run behind self-signed certificates
        if config.tls_accept_invalid_certs {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            HemodashError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        })
    }

    /// Base URL this adapter talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(resource: &Resource, err: reqwest::Error) -> FetchError {
        let resource = resource.name().to_string();
        if err.is_timeout() {
            FetchError::Timeout { resource }
        } else if err.is_decode() {
            FetchError::Decode {
                resource,
                message: err.to_string(),
            }
        } else {
            FetchError::Transport {
                resource,
                message: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self, resource: &Resource) -> std::result::Result<Value, FetchError> {
        let url = format!("{}{}", self.base_url, resource.path_and_query());

        tracing::debug!(resource = resource.name(), url = %url, "Fetching resource");

        let call = async {
            let response = self
                .client
                .get(&url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| Self::classify(resource, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::HttpStatus {
                    status: status.as_u16(),
                    resource: resource.name().to_string(),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|e| Self::classify(resource, e))
        };

        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                resource: resource.name().to_string(),
            }),
        }
    }
}
