//! Error types for the address lookup client

use reqwest::StatusCode;
use thiserror::Error;

/// The remote call could not be completed successfully.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Error getting address: {0}")]
    Connection(#[from] ConnectionError),

    #[error("Error decoding address response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl LookupError {
    pub fn is_connection(&self) -> bool {
        matches!(self, LookupError::Connection(_))
    }

    /// HTTP status observed on a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LookupError::Connection(ConnectionError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// True when the transport gave up because the request timed out.
    pub fn is_timeout(&self) -> bool {
        match self {
            LookupError::Connection(ConnectionError::Transport(e)) => e.is_timeout(),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        LookupError::Connection(ConnectionError::Transport(e))
    }
}

pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn status_error_reports_code() {
        let err = LookupError::from(ConnectionError::Status {
            url: "https://litecoinspace.org/api/address/x".to_string(),
            status: StatusCode::NOT_FOUND,
        });

        assert!(err.is_connection());
        assert!(!err.is_timeout());
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let msg = err.to_string();
        assert!(msg.starts_with("Error getting address"), "got: {msg}");
        assert!(msg.contains("404"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn reqwest_error_converts_to_transport_connection_error() {
        let cause = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        let err = LookupError::from(cause);

        assert!(matches!(
            err,
            LookupError::Connection(ConnectionError::Transport(_))
        ));
        assert!(err.is_connection());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn decode_error_is_not_a_connection_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = LookupError::Decode(json_err);

        assert!(!err.is_connection());
        assert_eq!(err.status(), None);
        assert!(err.source().is_some());
    }
}
