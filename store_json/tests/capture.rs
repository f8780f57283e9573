//! Capturing a report snapshot while the dump file is being replaced.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use vote_report_engine::{LedgerSnapshot, StandbyWindow};
use vote_report_nullables::NullRounds;
use vote_report_store::{StoreError, WalletRepository};
use vote_report_store_json::JsonLedgerStore;
use vote_report_types::WalletSnapshot;

const AT_10: &str = r#"{
    "height": 10,
    "supply": "100000000000",
    "wallets": [
        { "id": "a", "balance": 0,
          "delegate": { "username": "alice_at_h10", "rank": 1,
                        "vote_balance": 0, "public_key": "pk_a" } }
    ]
}"#;

const AT_11: &str = r#"{
    "height": 11,
    "supply": "200000000000",
    "wallets": [
        { "id": "b", "balance": 0,
          "delegate": { "username": "bob_at_h11", "rank": 1,
                        "vote_balance": 0, "public_key": "pk_b" } },
        { "id": "v", "balance": 50000000000, "vote": "pk_b" }
    ]
}"#;

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).expect("write dump");
}

/// Replaces the dump with the next block's just before the first wallet read.
struct ReloadingWallets<'a> {
    store: &'a JsonLedgerStore,
    path: PathBuf,
    reloaded: AtomicBool,
}

impl WalletRepository for ReloadingWallets<'_> {
    fn all_wallets_at(&self, height: u64) -> Result<Vec<WalletSnapshot>, StoreError> {
        if !self.reloaded.swap(true, Ordering::SeqCst) {
            write(&self.path, AT_11);
        }
        self.store.all_wallets_at(height)
    }
}

#[test]
fn reload_between_supply_and_wallets_never_mixes_heights() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("ledger.json");
    write(&path, AT_10);
    let store = JsonLedgerStore::open(&path).expect("open");
    let wallets = ReloadingWallets {
        store: &store,
        path: path.clone(),
        reloaded: AtomicBool::new(false),
    };

    let snap = LedgerSnapshot::capture(
        &store,
        &wallets,
        &NullRounds::new(1),
        StandbyWindow::default(),
    )
    .expect("capture");

    assert_eq!(snap.height, 11);
    assert_eq!(snap.supply.raw(), 200_000_000_000);
    let names: Vec<_> = snap
        .wallets
        .iter()
        .filter_map(|w| w.delegate.as_ref().map(|d| d.username.clone()))
        .collect();
    assert_eq!(names, ["bob_at_h11"]);
    assert!(snap.validate().is_ok());
}
