//! Point-in-time wallet views read from the wallet repository.

use serde::{Deserialize, Serialize};

use crate::{Amount, WalletId};

/// Delegate attributes of a wallet registered as a block-producing candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegateInfo {
    pub username: String,
    /// Forging rank. Unranked delegates carry no rank and sort as rank 0.
    #[serde(default)]
    pub rank: Option<i64>,
    /// Total balance of all wallets voting for this delegate.
    pub vote_balance: Amount,
    /// Identifier voters reference in their vote target.
    pub public_key: WalletId,
}

impl DelegateInfo {
    pub fn new(
        username: impl Into<String>,
        rank: Option<i64>,
        vote_balance: Amount,
        public_key: impl Into<WalletId>,
    ) -> Self {
        Self {
            username: username.into(),
            rank,
            vote_balance,
            public_key: public_key.into(),
        }
    }

    /// Rank used for ordering; an absent rank counts as 0.
    pub fn rank_or_default(&self) -> i64 {
        self.rank.unwrap_or(0)
    }
}

/// One ledger account as seen at snapshot time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    pub id: WalletId,
    pub balance: Amount,
    /// Delegate this wallet votes for, if any.
    #[serde(default, rename = "vote")]
    pub vote_target: Option<WalletId>,
    #[serde(default)]
    pub delegate: Option<DelegateInfo>,
}

impl WalletSnapshot {
    pub fn new(id: impl Into<WalletId>, balance: Amount) -> Self {
        Self {
            id: id.into(),
            balance,
            vote_target: None,
            delegate: None,
        }
    }

    pub fn with_vote(mut self, target: impl Into<WalletId>) -> Self {
        self.vote_target = Some(target.into());
        self
    }

    pub fn with_delegate(mut self, info: DelegateInfo) -> Self {
        self.delegate = Some(info);
        self
    }

    pub fn has_voted(&self) -> bool {
        self.vote_target.is_some()
    }

    pub fn is_delegate(&self) -> bool {
        self.delegate.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_rank_defaults_to_zero() {
        let info = DelegateInfo::new("genesis_1", None, Amount::ZERO, "pk1");
        assert_eq!(info.rank_or_default(), 0);
    }

    #[test]
    fn builder_sets_vote_and_delegate() {
        let wallet = WalletSnapshot::new("AWallet", Amount::from_tokens(5))
            .with_vote("pk1")
            .with_delegate(DelegateInfo::new("alice", Some(3), Amount::ZERO, "pk2"));
        assert!(wallet.has_voted());
        assert!(wallet.is_delegate());
        assert_eq!(wallet.vote_target, Some(WalletId::new("pk1")));
    }

    #[test]
    fn deserializes_ledger_dump_entry() {
        let json = r#"{
            "id": "AWallet",
            "balance": "250000000",
            "vote": "pk9",
            "delegate": { "username": "bob", "vote_balance": 0, "public_key": "pk1" }
        }"#;
        let wallet: WalletSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(wallet.balance, Amount::new(250_000_000));
        assert_eq!(wallet.vote_target, Some(WalletId::new("pk9")));
        let delegate = wallet.delegate.unwrap();
        assert_eq!(delegate.rank, None);
        assert_eq!(delegate.username, "bob");
    }

    #[test]
    fn plain_wallet_has_no_optional_fields() {
        let wallet: WalletSnapshot =
            serde_json::from_str(r#"{ "id": "AWallet", "balance": 1 }"#).unwrap();
        assert!(!wallet.has_voted());
        assert!(!wallet.is_delegate());
    }
}
