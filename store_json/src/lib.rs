//! JSON ledger dump backend.
//!
//! Reads a point-in-time export of the ledger (`height`, `supply`, `wallets`)
//! from disk and serves it through the `vote-report-store` traits. The parsed
//! dump is cached and replaced wholesale whenever the file changes.

pub mod dump;
pub mod error;
pub mod store;

pub use dump::LedgerDump;
pub use error::JsonStoreError;
pub use store::JsonLedgerStore;
