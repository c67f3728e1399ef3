//! Error logging capability handed to the client.

use tracing::error;

/// Sink for error-severity records emitted by the client.
pub trait ErrorLog: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards records to the global `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn error(&self, message: &str) {
        error!("{}", message);
    }
}
