//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator the vote report reads from (chain tip and supply,
//! wallet repository, round calculator) is abstracted behind a trait in
//! `vote-report-store`. This crate provides test-friendly implementations that:
//! - Return exactly the values a test put in
//! - Can be switched offline to simulate an unavailable upstream
//! - Never touch the filesystem or network
//!
//! Usage: swap real implementations for nullables in tests.

pub mod ledger;
pub mod rounds;
pub mod wallets;

pub use ledger::NullLedger;
pub use rounds::NullRounds;
pub use wallets::NullWalletRepository;
