//! Token amounts.
//!
//! Amounts are fixed-point integers in the token's smallest unit. The ledger
//! can report negative balances (e.g. a genesis wallet that minted the
//! supply), so the raw value is signed; consumers that require non-negative
//! amounts validate explicitly instead of clamping.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// Number of fraction digits of one whole token.
pub const TOKEN_DECIMALS: u32 = 8;

/// Smallest units per whole token (`10^TOKEN_DECIMALS`).
pub const TOKEN_UNIT: i128 = 100_000_000;

/// A token amount in the smallest unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(i128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub const fn new(raw: i128) -> Self {
        Self(raw)
    }

    /// Build an amount from a number of whole tokens.
    pub const fn from_tokens(tokens: i128) -> Self {
        Self(tokens * TOKEN_UNIT)
    }

    pub fn raw(&self) -> i128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Whole tokens, truncated toward zero. Fraction digits are dropped, never rounded.
    pub fn whole_tokens(&self) -> i128 {
        self.0 / TOKEN_UNIT
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i128>()
            .map(Self)
            .map_err(|_| TypesError::InvalidAmount(s.to_string()))
    }
}

impl From<i128> for Amount {
    fn from(raw: i128) -> Self {
        Self(raw)
    }
}

// Serialized as a decimal string so values beyond 2^53 survive JSON tooling.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor)
    }
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Amount;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer amount or a decimal string of one")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Amount, E> {
        Ok(Amount(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Amount, E> {
        Ok(Amount(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Amount, E> {
        Ok(Amount(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Amount, E> {
        i128::try_from(v)
            .map(Amount)
            .map_err(|_| E::custom(format!("amount {v} out of range")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Amount, E> {
        v.parse().map_err(E::custom)
    }
}
