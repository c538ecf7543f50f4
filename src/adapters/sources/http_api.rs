//! HTTP API source
//!
//! Fetches a JSON array of sales records with a single `GET`.

use super::traits::FactSource;
use crate::config::ApiSourceConfig;
use crate::domain::{EtlError, Result, SalesRecord, SourceError};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use std::time::Duration;

/// Source backed by an HTTP endpoint
pub struct HttpApiSource {
    config: ApiSourceConfig,
    client: Client,
}

impl HttpApiSource {
    /// Create a new API source
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ApiSourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("sales-etl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| EtlError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl FactSource for HttpApiSource {
    fn name(&self) -> &str {
        &self.config.name
    }

    async fn extract(&self) -> Result<Vec<SalesRecord>> {
        let mut request = self
            .client
            .get(&self.config.url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose_secret().as_str());
        }

        tracing::debug!(source = %self.config.name, url = %self.config.url, "Requesting sales");

        let response = request
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Http {
                status: status.as_u16(),
                message: body,
            }
            .into());
        }

        let records = response
            .json::<Vec<SalesRecord>>()
            .await
            .map_err(|e| SourceError::InvalidFormat(e.to_string()))?;

        Ok(records)
    }
}
