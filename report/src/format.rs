//! Display rules for report figures.
//!
//! These reproduce fixed output independent of any locale: comma thousands
//! separators, token amounts truncated to whole tokens, approvals with
//! exactly two fraction digits.

use rust_decimal::Decimal;

use crate::approval::APPROVAL_DECIMALS;
use vote_report_types::Amount;

/// Group the digits of `n` in threes with commas: `1234567` → `"1,234,567"`.
pub fn group_thousands(n: i128) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rank with at least two integer digits: `3` → `"03"`, `1200` → `"1,200"`.
pub fn format_rank(rank: i64) -> String {
    let grouped = group_thousands(rank.into());
    if (0..10).contains(&rank) {
        format!("0{grouped}")
    } else {
        grouped
    }
}

/// Count with thousands grouping.
pub fn format_count(count: u64) -> String {
    group_thousands(count.into())
}

/// Whole tokens of `amount`, truncated, with thousands grouping.
pub fn format_tokens(amount: Amount) -> String {
    group_thousands(amount.whole_tokens())
}

/// Approval percentage with exactly [`APPROVAL_DECIMALS`] fraction digits.
pub fn format_approval(approval: Decimal) -> String {
    let mut fixed = approval;
    fixed.rescale(APPROVAL_DECIMALS);
    fixed.to_string()
}

/// Participation percentage without forced fraction digits.
pub fn format_participation(participation: Decimal) -> String {
    participation.normalize().to_string()
}
