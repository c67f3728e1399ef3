use serde::Deserialize;
use serde_json::Value;

use crate::error::{LookupError, LookupResult};

/// Response of `GET address/{address}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddressStats {
    pub address: String,
    pub chain_stats: TxoStats,
    pub mempool_stats: TxoStats,
}

/// Transaction output counters, either confirmed or pending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TxoStats {
    pub tx_count: u64,
    pub funded_txo_count: u64,
    pub funded_txo_sum: u64,
    pub spent_txo_count: u64,
    pub spent_txo_sum: u64,
}

impl TxoStats {
    /// Received minus spent, in litoshis. Negative for mempool stats when
    /// pending spends outweigh pending receipts.
    pub fn balance(&self) -> i64 {
        let funded = i128::from(self.funded_txo_sum);
        let spent = i128::from(self.spent_txo_sum);
        clamp_i64(funded - spent)
    }
}

impl AddressStats {
    /// Decode the pass-through JSON returned by
    /// [`get_address`](crate::client::AddressLookupClient::get_address).
    pub fn from_value(value: Value) -> LookupResult<Self> {
        serde_json::from_value(value).map_err(LookupError::Decode)
    }

    pub fn confirmed_balance(&self) -> i64 {
        self.chain_stats.balance()
    }

    pub fn unconfirmed_balance(&self) -> i64 {
        self.mempool_stats.balance()
    }

    pub fn total_balance(&self) -> i64 {
        self.confirmed_balance()
            .saturating_add(self.unconfirmed_balance())
    }

    pub fn tx_count(&self) -> u64 {
        self.chain_stats
            .tx_count
            .saturating_add(self.mempool_stats.tx_count)
    }
}

fn clamp_i64(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}
