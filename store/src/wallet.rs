//! Wallet repository trait.

use crate::StoreError;
use vote_report_types::WalletSnapshot;

/// Point-in-time read access to every wallet in the ledger.
pub trait WalletRepository: Send + Sync {
    /// All wallets as of `height`, in the repository's iteration order.
    ///
    /// Fails with [`StoreError::Stale`] when the repository no longer (or
    /// not yet) reflects `height`, so callers never pair wallets from one
    /// height with chain figures from another.
    fn all_wallets_at(&self, height: u64) -> Result<Vec<WalletSnapshot>, StoreError>;

    /// Number of wallets as of `height`. Backends with a cheaper count should override this.
    fn wallet_count_at(&self, height: u64) -> Result<u64, StoreError> {
        self.all_wallets_at(height).map(|w| w.len() as u64)
    }
}
