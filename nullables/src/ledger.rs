//! Nullable chain state.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use vote_report_store::{LedgerService, StoreError};
use vote_report_types::Amount;

/// An in-memory chain tip with a settable height and supply.
///
/// The supply is reported for the current height only, like a real node
/// that cannot answer for heights it has not reached.
pub struct NullLedger {
    height: AtomicU64,
    supply: Mutex<Amount>,
    offline: AtomicBool,
}

impl NullLedger {
    pub fn new(height: u64, supply: Amount) -> Self {
        Self {
            height: AtomicU64::new(height),
            supply: Mutex::new(supply),
            offline: AtomicBool::new(false),
        }
    }

    pub fn set_height(&self, height: u64) {
        self.height.store(height, Ordering::SeqCst);
    }

    pub fn set_supply(&self, supply: Amount) {
        *self.supply.lock().unwrap() = supply;
    }

    /// Make every call fail with [`StoreError::Unavailable`] until `go_online`.
    pub fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    pub fn go_online(&self) {
        self.offline.store(false, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("null ledger is offline".into()));
        }
        Ok(())
    }
}

impl LedgerService for NullLedger {
    fn current_height(&self) -> Result<u64, StoreError> {
        self.check_online()?;
        Ok(self.height.load(Ordering::SeqCst))
    }

    fn supply_at(&self, height: u64) -> Result<Amount, StoreError> {
        self.check_online()?;
        let current = self.height.load(Ordering::SeqCst);
        if height != current {
            return Err(StoreError::Stale {
                requested: height,
                current,
            });
        }
        Ok(*self.supply.lock().unwrap())
    }
}
