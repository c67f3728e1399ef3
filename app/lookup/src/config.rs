//! Configuration management
//!
//! Client settings and their defaults. Nothing here reads the environment.

use std::time::Duration;

/// Public litecoinspace.org API root.
pub const DEFAULT_BASE_URL: &str = "https://litecoinspace.org/api/";

/// Per-request timeout applied when nothing else is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for an [`AddressLookupClient`](crate::client::AddressLookupClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, always ending in `/`.
    pub base_url: String,
    /// Upper bound for one request, connect through body read.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

pub(crate) fn normalize_base_url(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_litecoinspace() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://litecoinspace.org/api/");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn new_appends_missing_trailing_slash() {
        let config = ClientConfig::new("http://127.0.0.1:3000/api");
        assert_eq!(config.base_url, "http://127.0.0.1:3000/api/");

        let config = ClientConfig::new("http://127.0.0.1:3000/api/");
        assert_eq!(config.base_url, "http://127.0.0.1:3000/api/");
    }

    #[test]
    fn with_timeout_overrides_default() {
        let config = ClientConfig::new(DEFAULT_BASE_URL).with_timeout(Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_millis(250));
    }

    #[test]
    fn normalize_leaves_slashed_url_alone() {
        assert_eq!(normalize_base_url("http://h/api/".to_string()), "http://h/api/");
        assert_eq!(normalize_base_url("http://h/api".to_string()), "http://h/api/");
    }
}
