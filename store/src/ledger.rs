//! Chain state trait.

use crate::StoreError;
use vote_report_types::Amount;

/// Read access to the chain tip and token supply.
pub trait LedgerService: Send + Sync {
    /// Height of the last accepted block.
    fn current_height(&self) -> Result<u64, StoreError>;

    /// Total token supply at `height`. A source that only answers for its
    /// current height fails with [`StoreError::Stale`] for any other.
    fn supply_at(&self, height: u64) -> Result<Amount, StoreError>;
}
