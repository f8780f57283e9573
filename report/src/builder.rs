//! Report construction.

use serde::Serialize;

use crate::approval::{approval, participation};
use crate::format::{
    format_approval, format_count, format_participation, format_rank, format_tokens,
};
use crate::{LedgerSnapshot, ReportError, VoterIndex};
use vote_report_types::{Amount, DelegateInfo};

/// One delegate line of the report, fully formatted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DelegateRow {
    pub rank: String,
    pub username: String,
    pub approval_percent: String,
    pub vote_balance_display: String,
    pub voter_count: String,
}

/// The vote report for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    pub height: u64,
    pub active_delegate_count: u32,
    pub active_delegates: Vec<DelegateRow>,
    pub standby_delegates: Vec<DelegateRow>,
    pub voter_count: String,
    pub supply_display: String,
    pub total_votes_display: String,
    pub participation_percent: String,
    /// Raw figures the display strings were derived from.
    pub voters: u64,
    pub total_votes: Amount,
    pub supply: Amount,
}

/// Build the vote report for `snapshot`.
///
/// Delegates are ranked ascending with a stable sort, so equal ranks keep
/// wallet iteration order. A delegate without a rank sorts as rank 0, ahead
/// of every ranked delegate. The first `active_delegate_count` delegates are
/// active; the following ones up to `standby_limit` are standby.
///
/// A zero supply yields 0 for every percentage instead of an error.
pub fn build_report(snapshot: &LedgerSnapshot) -> Result<Report, ReportError> {
    snapshot.validate()?;

    let mut delegates: Vec<&DelegateInfo> = snapshot
        .wallets
        .iter()
        .filter_map(|wallet| wallet.delegate.as_ref())
        .collect();
    delegates.sort_by_key(|delegate| delegate.rank_or_default());

    let active_end = (snapshot.active_delegate_count as usize).min(delegates.len());
    let standby_end = snapshot.standby_limit.min(delegates.len()).max(active_end);

    let voters = VoterIndex::from_wallets(&snapshot.wallets)?;

    let rows = |slice: &[&DelegateInfo]| -> Result<Vec<DelegateRow>, ReportError> {
        slice
            .iter()
            .map(|delegate| delegate_row(delegate, &voters, snapshot.supply))
            .collect()
    };

    let participation =
        or_zero_on_zero_supply(participation(voters.total_votes(), snapshot.supply))?;

    Ok(Report {
        height: snapshot.height,
        active_delegate_count: snapshot.active_delegate_count,
        active_delegates: rows(&delegates[..active_end])?,
        standby_delegates: rows(&delegates[active_end..standby_end])?,
        voter_count: format_count(voters.voter_count()),
        supply_display: format_tokens(snapshot.supply),
        total_votes_display: format_tokens(voters.total_votes()),
        participation_percent: format_participation(participation),
        voters: voters.voter_count(),
        total_votes: voters.total_votes(),
        supply: snapshot.supply,
    })
}

fn delegate_row(
    delegate: &DelegateInfo,
    voters: &VoterIndex,
    supply: Amount,
) -> Result<DelegateRow, ReportError> {
    let approval = or_zero_on_zero_supply(approval(delegate.vote_balance, supply))?;
    Ok(DelegateRow {
        rank: format_rank(delegate.rank_or_default()),
        username: delegate.username.clone(),
        approval_percent: format_approval(approval),
        vote_balance_display: format_tokens(delegate.vote_balance),
        voter_count: format_count(voters.count_for(&delegate.public_key)),
    })
}

fn or_zero_on_zero_supply(
    result: Result<rust_decimal::Decimal, ReportError>,
) -> Result<rust_decimal::Decimal, ReportError> {
    match result {
        Err(ReportError::ZeroSupply) => Ok(rust_decimal::Decimal::ZERO),
        other => other,
    }
}
