//! Abstract data-source traits for the vote report.
//!
//! The report never talks to a chain directly. A ledger backend (a JSON dump,
//! a live node, in-memory doubles for testing) implements these traits and
//! the rest of the codebase depends only on the traits.

pub mod error;
pub mod ledger;
pub mod round;
pub mod wallet;

pub use error::StoreError;
pub use ledger::LedgerService;
pub use round::{Milestone, MilestoneRounds, RoundCalculator};
pub use wallet::WalletRepository;
