//! Vote report computation engine.
//!
//! Turns a point-in-time [`LedgerSnapshot`] into a [`Report`]: the ranked
//! active and standby delegates with approval, vote and voter-count columns,
//! plus aggregate voter participation.
//!
//! ## Module overview
//!
//! - [`snapshot`]: Snapshot input, its validation, and capture from collaborators.
//! - [`voters`]: Qualifying-voter index (per-delegate counts, total votes).
//! - [`approval`]: Percentage arithmetic for approval and participation.
//! - [`format`]: Display rules (grouping, zero-padding, truncation).
//! - [`builder`]: [`build_report`] and the output types.
//! - [`error`]: Engine error types.
//!
//! Everything here is pure. It performs no I/O and never logs.

pub mod approval;
pub mod builder;
pub mod error;
pub mod format;
pub mod snapshot;
pub mod voters;

pub use builder::{build_report, DelegateRow, Report};
pub use error::ReportError;
pub use snapshot::{LedgerSnapshot, StandbyWindow};
pub use voters::VoterIndex;
