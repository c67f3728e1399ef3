//! litelookup
//!
//! Client for the litecoinspace.org address statistics endpoint.

pub mod client;
pub mod config;
pub mod error;
pub mod logger;
pub mod protocol;

pub use client::AddressLookupClient;
pub use config::ClientConfig;
pub use error::{ConnectionError, LookupError, LookupResult};
pub use logger::{ErrorLog, TracingErrorLog};
pub use protocol::{AddressStats, TxoStats};
