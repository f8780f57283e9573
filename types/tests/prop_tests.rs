use proptest::prelude::*;

use vote_report_types::{Amount, WalletSnapshot, MIN_VOTER_BALANCE, TOKEN_UNIT};

proptest! {
    /// whole_tokens never rounds up: tokens * unit <= raw < (tokens + 1) * unit.
    #[test]
    fn whole_tokens_truncates(raw in 0i128..1_000_000_000_000_000_000) {
        let tokens = Amount::new(raw).whole_tokens();
        prop_assert!(tokens * TOKEN_UNIT <= raw);
        prop_assert!(raw < (tokens + 1) * TOKEN_UNIT);
    }

    /// Decimal strings parse to the same raw value as the integer they spell.
    #[test]
    fn amount_parses_its_display(raw in any::<i128>()) {
        let amount = Amount::new(raw);
        prop_assert_eq!(amount.to_string().parse::<Amount>(), Ok(amount));
    }

    /// checked_add agrees with i128 arithmetic whenever it does not overflow.
    #[test]
    fn amount_checked_add(a in any::<i64>(), b in any::<i64>()) {
        let sum = Amount::new(a.into()).checked_add(Amount::new(b.into()));
        prop_assert_eq!(sum, Some(Amount::new(i128::from(a) + i128::from(b))));
    }

    /// Ledger dump entries with string balances deserialize exactly.
    #[test]
    fn wallet_balance_from_string(raw in 0i128..i128::MAX) {
        let json = format!(r#"{{ "id": "w", "balance": "{raw}" }}"#);
        let wallet: WalletSnapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(wallet.balance.raw(), raw);
    }

    /// The voter threshold compares strictly.
    #[test]
    fn threshold_ordering(raw in 0i128..1_000_000_000) {
        prop_assert_eq!(Amount::new(raw) > MIN_VOTER_BALANCE, raw > 10_000_000);
    }
}
