//! Fixed protocol values the report depends on.

use crate::amount::{Amount, TOKEN_UNIT};

/// A wallet must hold strictly more than this to count as a voter (0.1 token).
pub const MIN_VOTER_BALANCE: Amount = Amount::new(TOKEN_UNIT / 10);

/// Exclusive upper bound of the standby window when no row count is configured.
pub const DEFAULT_STANDBY_LIMIT: usize = 100;

/// Active delegate seats used when no round milestones are configured.
pub const DEFAULT_ACTIVE_DELEGATES: u32 = 51;
