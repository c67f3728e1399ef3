use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{normalize_base_url, ClientConfig};
use crate::error::{ConnectionError, LookupError, LookupResult};
use crate::logger::{ErrorLog, TracingErrorLog};
use crate::protocol::AddressStats;

/// Client for the litecoinspace `address/{address}` endpoint.
///
/// Holds no connection between calls: every lookup opens its own HTTP
/// session and tears it down before returning.
#[derive(Clone)]
pub struct AddressLookupClient {
    base_url: String,
    timeout: Duration,
    log: Arc<dyn ErrorLog>,
}

impl Default for AddressLookupClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AddressLookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddressLookupClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AddressLookupClient {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            base_url: normalize_base_url(config.base_url),
            timeout: config.request_timeout,
            log: Arc::new(TracingErrorLog),
        }
    }

    /// Replace the sink that receives the non-200 error record.
    pub fn with_logger(mut self, log: Arc<dyn ErrorLog>) -> Self {
        self.log = log;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn address_url(&self, address: &str) -> String {
        format!("{}address/{}", self.base_url, address)
    }

    /// Fetch chain and mempool statistics for `address`.
    ///
    /// The address is not validated; it goes into the URL path as given.
    /// On HTTP 200 the JSON body is returned as-is. Any other status is
    /// logged once and returned as a [`ConnectionError::Status`].
    pub async fn get_address(&self, address: &str) -> LookupResult<Value> {
        let url = self.address_url(address);

        // Session lives for this call only and drops on every return path.
        let session = Client::builder().timeout(self.timeout).build()?;

        let response = session.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            self.log
                .error(&format!("Error getting address {}: HTTP {}", url, status));
            return Err(ConnectionError::Status { url, status }.into());
        }

        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(LookupError::Decode)
    }

    /// [`get_address`](Self::get_address) decoded into [`AddressStats`].
    pub async fn get_address_stats(&self, address: &str) -> LookupResult<AddressStats> {
        let value = self.get_address(address).await?;
        AddressStats::from_value(value)
    }
}
