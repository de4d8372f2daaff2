//! HTTP fetcher backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use correios_wsdl_core::FetchError;
use reqwest::{Client, StatusCode};
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::error::RefreshError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("correios-wsdl-refresh/", env!("CARGO_PKG_VERSION"));

/// Fetches documents with plain GET requests.
///
/// Only `200 OK` counts as success; redirects are followed by the client
/// before the status is inspected.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, RefreshError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RefreshError::HttpClient(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::transport(format!(
                "timed out after {}s",
                self.timeout.as_secs_f64()
            ))
        } else {
            FetchError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::status(status.as_u16()));
        }

        response.text().await.map_err(|e| self.transport_error(e))
    }

    fn name(&self) -> &str {
        "http"
    }
}
