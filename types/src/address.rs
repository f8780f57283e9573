//! Wallet identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a wallet in the ledger: an address or a public key.
///
/// Vote targets reference delegates by this identifier, so comparison is
/// exact and case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(String);

impl WalletId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier is non-blank.
    pub fn is_valid(&self) -> bool {
        !self.0.trim().is_empty()
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for WalletId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for WalletId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_identifiers_are_invalid() {
        assert!(WalletId::new("AJjv").is_valid());
        assert!(!WalletId::new("").is_valid());
        assert!(!WalletId::new("  ").is_valid());
    }
}
