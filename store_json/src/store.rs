//! File-backed implementation of the ledger and wallet traits.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use tracing::debug;

use crate::{JsonStoreError, LedgerDump};
use vote_report_store::{LedgerService, StoreError, WalletRepository};
use vote_report_types::{Amount, WalletSnapshot};

/// Identifies one version of the dump file on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FileStamp {
    modified: Option<SystemTime>,
    len: u64,
}

struct CachedDump {
    stamp: FileStamp,
    dump: Arc<LedgerDump>,
}

/// Serves a JSON ledger dump through [`LedgerService`] and [`WalletRepository`].
///
/// Readers share the parsed dump through an `Arc`. When the file's
/// modification time or size changes, a freshly parsed dump replaces the
/// cached one; an in-flight reader keeps the version it already holds.
pub struct JsonLedgerStore {
    path: PathBuf,
    cache: RwLock<Option<CachedDump>>,
}

impl JsonLedgerStore {
    /// Create a store that loads lazily on first read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: RwLock::new(None),
        }
    }

    /// Create a store and load the dump immediately, failing if it is unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, JsonStoreError> {
        let store = Self::new(path);
        store.dump()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current dump, reloading it if the file changed since the last read.
    pub fn dump(&self) -> Result<Arc<LedgerDump>, JsonStoreError> {
        let metadata = std::fs::metadata(&self.path)?;
        let stamp = FileStamp {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        };

        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(cached) = cache.as_ref() {
                if cached.stamp == stamp && stamp.modified.is_some() {
                    return Ok(Arc::clone(&cached.dump));
                }
            }
        }

        let dump = Arc::new(LedgerDump::from_path(&self.path)?);
        debug!(
            path = %self.path.display(),
            height = dump.height,
            wallets = dump.wallets.len(),
            "loaded ledger dump"
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        *cache = Some(CachedDump {
            stamp,
            dump: Arc::clone(&dump),
        });
        Ok(dump)
    }
}

impl JsonLedgerStore {
    /// The current dump, provided it is still at `height`.
    fn dump_at(&self, height: u64) -> Result<Arc<LedgerDump>, StoreError> {
        let dump = self.dump()?;
        if dump.height != height {
            return Err(StoreError::Stale {
                requested: height,
                current: dump.height,
            });
        }
        Ok(dump)
    }
}

impl LedgerService for JsonLedgerStore {
    fn current_height(&self) -> Result<u64, StoreError> {
        Ok(self.dump()?.height)
    }

    fn supply_at(&self, height: u64) -> Result<Amount, StoreError> {
        Ok(self.dump_at(height)?.supply)
    }
}

impl WalletRepository for JsonLedgerStore {
    fn all_wallets_at(&self, height: u64) -> Result<Vec<WalletSnapshot>, StoreError> {
        Ok(self.dump_at(height)?.wallets.clone())
    }

    fn wallet_count_at(&self, height: u64) -> Result<u64, StoreError> {
        Ok(self.dump_at(height)?.wallets.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dump(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("ledger.json");
        let mut file = std::fs::File::create(&path).expect("create dump");
        file.write_all(content.as_bytes()).expect("write dump");
        path
    }

    const DUMP: &str = r#"{
        "height": 42,
        "supply": "100000000000",
        "wallets": [
            { "id": "A1", "balance": "500000000", "vote": "pk1" },
            { "id": "A2", "balance": 0,
              "delegate": { "username": "alice", "rank": 1, "vote_balance": "500000000", "public_key": "pk1" } }
        ]
    }"#;

    #[test]
    fn serves_height_supply_and_wallets() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonLedgerStore::open(write_dump(&dir, DUMP)).expect("open");

        assert_eq!(store.current_height().unwrap(), 42);
        assert_eq!(store.supply_at(42).unwrap(), Amount::from_tokens(1_000));
        let wallets = store.all_wallets_at(42).unwrap();
        assert_eq!(wallets.len(), 2);
        assert_eq!(store.wallet_count_at(42).unwrap(), 2);
        assert!(wallets[1].is_delegate());
    }

    #[test]
    fn other_height_is_stale() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonLedgerStore::open(write_dump(&dir, DUMP)).expect("open");
        assert!(matches!(
            store.supply_at(41),
            Err(StoreError::Stale {
                requested: 41,
                current: 42
            })
        ));
        assert!(matches!(
            store.all_wallets_at(43),
            Err(StoreError::Stale { .. })
        ));
    }

    #[test]
    fn wallets_at_old_height_are_stale_after_reload() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_dump(&dir, DUMP);
        let store = JsonLedgerStore::open(&path).expect("open");
        assert_eq!(store.current_height().unwrap(), 42);

        write_dump(&dir, r#"{ "height": 43, "supply": "100000000000", "wallets": [] }"#);

        assert!(matches!(
            store.all_wallets_at(42),
            Err(StoreError::Stale {
                requested: 42,
                current: 43
            })
        ));
        assert!(store.all_wallets_at(43).unwrap().is_empty());
    }

    #[test]
    fn reloads_after_file_changes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = write_dump(&dir, DUMP);
        let store = JsonLedgerStore::open(&path).expect("open");
        let first = store.dump().unwrap();

        write_dump(&dir, r#"{ "height": 43, "supply": "100000000000", "wallets": [] }"#);

        assert_eq!(store.current_height().unwrap(), 43);
        // The earlier reader still holds its own version.
        assert_eq!(first.height, 42);
    }

    #[test]
    fn unchanged_file_reuses_cached_dump() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonLedgerStore::open(write_dump(&dir, DUMP)).expect("open");
        let a = store.dump().unwrap();
        let b = store.dump().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonLedgerStore::new(dir.path().join("absent.json"));
        assert!(matches!(
            store.current_height(),
            Err(StoreError::Unavailable(_))
        ));
        assert!(JsonLedgerStore::open(dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = JsonLedgerStore::new(write_dump(&dir, "{ not json"));
        assert!(matches!(
            store.all_wallets_at(1),
            Err(StoreError::Serialization(_))
        ));
    }
}
