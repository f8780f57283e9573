//! Fundamental types for the vote report.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! token amounts, wallet identifiers, wallet/delegate snapshots, protocol
//! constants and the network client descriptor shown in report headers.

pub mod address;
pub mod amount;
pub mod error;
pub mod network;
pub mod params;
pub mod wallet;

pub use address::WalletId;
pub use amount::{Amount, TOKEN_DECIMALS, TOKEN_UNIT};
pub use error::TypesError;
pub use network::NetworkClient;
pub use params::{DEFAULT_ACTIVE_DELEGATES, DEFAULT_STANDBY_LIMIT, MIN_VOTER_BALANCE};
pub use wallet::{DelegateInfo, WalletSnapshot};
