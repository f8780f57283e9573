//! Percentages of the total supply.
//!
//! Computed in decimal fixed point from raw integer amounts; floats never
//! touch token amounts.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::ReportError;
use vote_report_types::Amount;

/// Fraction digits an approval is rounded to.
pub const APPROVAL_DECIMALS: u32 = 2;

/// Fraction digits participation keeps before trailing zeros are dropped.
pub const PARTICIPATION_DECIMALS: u32 = 20;

/// Share of `supply` backing a delegate with `vote_balance`, as a percentage
/// rounded half-up to [`APPROVAL_DECIMALS`].
pub fn approval(vote_balance: Amount, supply: Amount) -> Result<Decimal, ReportError> {
    Ok(percent_of(vote_balance, supply)?
        .round_dp_with_strategy(APPROVAL_DECIMALS, RoundingStrategy::MidpointAwayFromZero))
}

/// Share of `supply` held by voters, as a percentage rounded half-up to
/// [`PARTICIPATION_DECIMALS`] with trailing zeros removed.
pub fn participation(total_votes: Amount, supply: Amount) -> Result<Decimal, ReportError> {
    Ok(percent_of(total_votes, supply)?
        .round_dp_with_strategy(PARTICIPATION_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize())
}

/// `part * 100 / whole` at full decimal precision.
pub fn percent_of(part: Amount, whole: Amount) -> Result<Decimal, ReportError> {
    if whole.is_zero() {
        return Err(ReportError::ZeroSupply);
    }
    let part = to_decimal(part)?;
    let whole = to_decimal(whole)?;
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .ok_or_else(|| ReportError::Validation("percentage out of decimal range".into()))
}

fn to_decimal(amount: Amount) -> Result<Decimal, ReportError> {
    Decimal::try_from_i128_with_scale(amount.raw(), 0)
        .map_err(|_| ReportError::Validation(format!("amount {amount} out of decimal range")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn quarter_of_supply_is_25_percent() {
        let pct = approval(Amount::from_tokens(250), Amount::from_tokens(1_000)).unwrap();
        assert_eq!(pct, dec("25"));
    }

    #[test]
    fn approval_rounds_half_up() {
        // 1 / 8 = 0.125% -> 0.13
        let pct = approval(Amount::new(1), Amount::new(800)).unwrap();
        assert_eq!(pct, dec("0.13"));
        // 1 / 3 = 33.333..% -> 33.33
        let pct = approval(Amount::new(1), Amount::new(3)).unwrap();
        assert_eq!(pct, dec("33.33"));
        // 2 / 3 = 66.666..% -> 66.67
        let pct = approval(Amount::new(2), Amount::new(3)).unwrap();
        assert_eq!(pct, dec("66.67"));
    }

    #[test]
    fn participation_keeps_twenty_digits() {
        let pct = participation(Amount::new(1), Amount::new(3)).unwrap();
        assert_eq!(pct, dec("33.33333333333333333333"));
        let pct = participation(Amount::new(2), Amount::new(3)).unwrap();
        assert_eq!(pct, dec("66.66666666666666666667"));
    }

    #[test]
    fn participation_drops_trailing_zeros() {
        let pct = participation(Amount::from_tokens(50), Amount::from_tokens(200)).unwrap();
        assert_eq!(pct.to_string(), "25");
    }

    #[test]
    fn zero_supply_is_a_data_error() {
        assert_eq!(
            approval(Amount::from_tokens(1), Amount::ZERO),
            Err(ReportError::ZeroSupply)
        );
        assert_eq!(
            participation(Amount::ZERO, Amount::ZERO),
            Err(ReportError::ZeroSupply)
        );
    }

    #[test]
    fn realistic_supply_stays_in_range() {
        // 125M tokens supply, 40M voting.
        let pct = participation(Amount::from_tokens(40_000_000), Amount::from_tokens(125_000_000))
            .unwrap();
        assert_eq!(pct, dec("32"));
    }
}
