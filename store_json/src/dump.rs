//! On-disk ledger dump format.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::JsonStoreError;
use vote_report_types::{Amount, WalletSnapshot};

/// A ledger export taken at a single height.
///
/// ```json
/// {
///   "height": 4021,
///   "supply": "12500000000000000",
///   "wallets": [
///     { "id": "AJjv...", "balance": "2500000000", "vote": "02b5..." },
///     { "id": "AUex...", "balance": 0,
///       "delegate": { "username": "alice", "rank": 1,
///                     "vote_balance": "2500000000", "public_key": "02b5..." } }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerDump {
    pub height: u64,
    pub supply: Amount,
    #[serde(default)]
    pub wallets: Vec<WalletSnapshot>,
}

impl LedgerDump {
    pub fn from_json_str(s: &str) -> Result<Self, JsonStoreError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, JsonStoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
