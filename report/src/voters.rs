//! Qualifying voters, indexed by vote target.
//!
//! Built once per report so per-delegate voter counts cost a map lookup
//! instead of a scan over every voter.

use std::collections::HashMap;

use crate::ReportError;
use vote_report_types::{Amount, WalletId, WalletSnapshot, MIN_VOTER_BALANCE};

/// Voter totals for one snapshot.
#[derive(Clone, Debug, Default)]
pub struct VoterIndex {
    /// vote target → number of qualifying voters.
    counts: HashMap<WalletId, u64>,
    voter_count: u64,
    total_votes: Amount,
}

impl VoterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every qualifying voter in `wallets`.
    pub fn from_wallets<'a>(
        wallets: impl IntoIterator<Item = &'a WalletSnapshot>,
    ) -> Result<Self, ReportError> {
        let mut index = Self::new();
        for wallet in wallets {
            index.add_wallet(wallet)?;
        }
        Ok(index)
    }

    /// Whether `wallet` counts as a voter: it has a vote target and holds
    /// strictly more than [`MIN_VOTER_BALANCE`].
    pub fn qualifies(wallet: &WalletSnapshot) -> bool {
        wallet.has_voted() && wallet.balance > MIN_VOTER_BALANCE
    }

    /// Record `wallet` if it qualifies. Non-qualifying wallets are ignored.
    pub fn add_wallet(&mut self, wallet: &WalletSnapshot) -> Result<(), ReportError> {
        if !Self::qualifies(wallet) {
            return Ok(());
        }
        let Some(target) = &wallet.vote_target else {
            return Ok(());
        };

        self.total_votes = self
            .total_votes
            .checked_add(wallet.balance)
            .ok_or_else(|| ReportError::Validation("total votes overflow".into()))?;
        self.voter_count += 1;
        *self.counts.entry(target.clone()).or_insert(0) += 1;
        Ok(())
    }

    /// Qualifying voters targeting `delegate`. Returns 0 if none.
    pub fn count_for(&self, delegate: &WalletId) -> u64 {
        self.counts.get(delegate).copied().unwrap_or(0)
    }

    pub fn voter_count(&self) -> u64 {
        self.voter_count
    }

    /// Sum of qualifying voters' balances.
    pub fn total_votes(&self) -> Amount {
        self.total_votes
    }

    /// Number of distinct vote targets.
    pub fn target_count(&self) -> usize {
        self.counts.len()
    }
}
