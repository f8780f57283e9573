//! Report input: the ledger as seen at one height.

use std::collections::HashSet;

use crate::ReportError;
use vote_report_store::{LedgerService, RoundCalculator, StoreError, WalletRepository};
use vote_report_types::{Amount, WalletSnapshot, DEFAULT_STANDBY_LIMIT};

/// Captures tried before a moving ledger is reported as stale.
pub const CAPTURE_ATTEMPTS: u32 = 3;

/// How far past the active seats the standby listing extends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandbyWindow {
    /// Exclusive rank-list index where standby ends, regardless of seat count.
    /// Never shorter than the active seats.
    Fixed(usize),
    /// This many rows after the active seats.
    Rows(u32),
}

impl StandbyWindow {
    /// Window from an optional configured row count.
    pub fn from_rows(rows: Option<u32>) -> Self {
        rows.map_or(Self::default(), Self::Rows)
    }

    /// Exclusive upper bound of the standby slice for `active` seats.
    pub fn limit(&self, active: u32) -> usize {
        let active = active as usize;
        match *self {
            Self::Fixed(limit) => limit.max(active),
            Self::Rows(rows) => active.saturating_add(rows as usize),
        }
    }
}

impl Default for StandbyWindow {
    fn default() -> Self {
        Self::Fixed(DEFAULT_STANDBY_LIMIT)
    }
}

/// Everything [`build_report`](crate::build_report) needs, captured at one height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    pub height: u64,
    pub supply: Amount,
    /// Wallets in repository iteration order. Ties in delegate rank keep this order.
    pub wallets: Vec<WalletSnapshot>,
    pub active_delegate_count: u32,
    /// Exclusive upper bound of the standby window in the ranked delegate list.
    pub standby_limit: usize,
}

impl LedgerSnapshot {
    /// Read a consistent snapshot from the ledger collaborators.
    ///
    /// Every read is bound to the height read first. When a block lands
    /// mid-capture a collaborator answers [`StoreError::Stale`] and the whole
    /// capture restarts at the new tip, up to [`CAPTURE_ATTEMPTS`] times.
    pub fn capture(
        ledger: &dyn LedgerService,
        wallets: &dyn WalletRepository,
        rounds: &dyn RoundCalculator,
        window: StandbyWindow,
    ) -> Result<Self, StoreError> {
        let mut attempt = 1;
        loop {
            match Self::capture_once(ledger, wallets, rounds, window) {
                Err(StoreError::Stale { .. }) if attempt < CAPTURE_ATTEMPTS => attempt += 1,
                result => return result,
            }
        }
    }

    fn capture_once(
        ledger: &dyn LedgerService,
        wallets: &dyn WalletRepository,
        rounds: &dyn RoundCalculator,
        window: StandbyWindow,
    ) -> Result<Self, StoreError> {
        let height = ledger.current_height()?;
        let supply = ledger.supply_at(height)?;
        let active_delegate_count = rounds.active_delegate_count_at(height)?;
        let wallets = wallets.all_wallets_at(height)?;

        Ok(Self {
            height,
            supply,
            wallets,
            active_delegate_count,
            standby_limit: window.limit(active_delegate_count),
        })
    }

    /// Reject snapshots the report cannot be built from.
    ///
    /// Nothing is clamped: a single negative amount or rank fails the whole
    /// snapshot, since it points at an upstream bug.
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.height == 0 {
            return Err(invalid("height must be positive"));
        }
        if self.supply.is_negative() {
            return Err(invalid(format!("negative supply {}", self.supply)));
        }
        if self.active_delegate_count == 0 {
            return Err(invalid("active delegate count must be positive"));
        }
        if self.standby_limit < self.active_delegate_count as usize {
            return Err(invalid(format!(
                "standby limit {} is below the {} active seats",
                self.standby_limit, self.active_delegate_count
            )));
        }

        let mut seen = HashSet::with_capacity(self.wallets.len());
        for wallet in &self.wallets {
            if !wallet.id.is_valid() {
                return Err(invalid("blank wallet id"));
            }
            if !seen.insert(&wallet.id) {
                return Err(invalid(format!("duplicate wallet {}", wallet.id)));
            }
            if wallet.balance.is_negative() {
                return Err(invalid(format!(
                    "wallet {} has negative balance {}",
                    wallet.id, wallet.balance
                )));
            }
            let Some(delegate) = &wallet.delegate else {
                continue;
            };
            if delegate.username.trim().is_empty() {
                return Err(invalid(format!("delegate {} has no username", wallet.id)));
            }
            if delegate.rank_or_default() < 0 {
                return Err(invalid(format!(
                    "delegate {} has negative rank {}",
                    delegate.username,
                    delegate.rank_or_default()
                )));
            }
            if delegate.vote_balance.is_negative() {
                return Err(invalid(format!(
                    "delegate {} has negative vote balance {}",
                    delegate.username, delegate.vote_balance
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> ReportError {
    ReportError::Validation(msg.into())
}
