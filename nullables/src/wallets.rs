//! Nullable wallet repository.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use vote_report_store::{StoreError, WalletRepository};
use vote_report_types::WalletSnapshot;

/// An in-memory wallet set, returned in insertion order.
///
/// Answers for every height unless pinned with [`pin_height`](Self::pin_height),
/// after which reads at any other height are stale.
pub struct NullWalletRepository {
    wallets: Mutex<Vec<WalletSnapshot>>,
    pinned: Mutex<Option<u64>>,
    offline: AtomicBool,
}

impl NullWalletRepository {
    pub fn new() -> Self {
        Self::with_wallets(Vec::new())
    }

    pub fn with_wallets(wallets: Vec<WalletSnapshot>) -> Self {
        Self {
            wallets: Mutex::new(wallets),
            pinned: Mutex::new(None),
            offline: AtomicBool::new(false),
        }
    }

    pub fn add_wallet(&self, wallet: WalletSnapshot) {
        self.wallets.lock().unwrap().push(wallet);
    }

    /// Replace the whole wallet set.
    pub fn set_wallets(&self, wallets: Vec<WalletSnapshot>) {
        *self.wallets.lock().unwrap() = wallets;
    }

    /// Only answer reads at `height` from now on.
    pub fn pin_height(&self, height: u64) {
        *self.pinned.lock().unwrap() = Some(height);
    }

    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }
}

impl Default for NullWalletRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl WalletRepository for NullWalletRepository {
    fn all_wallets_at(&self, height: u64) -> Result<Vec<WalletSnapshot>, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "null wallet repository is offline".into(),
            ));
        }
        if let Some(current) = *self.pinned.lock().unwrap() {
            if current != height {
                return Err(StoreError::Stale {
                    requested: height,
                    current,
                });
            }
        }
        Ok(self.wallets.lock().unwrap().clone())
    }
}
