//! Plain-text rendering of a [`Report`].

use serde::Serialize;
use tera::{Context, Tera};

use vote_report_engine::{DelegateRow, Report};
use vote_report_types::NetworkClient;

const TEMPLATE: &str = "index.txt";

/// One delegate line with every column padded to its fixed width.
#[derive(Debug, Serialize)]
struct RowView<'a> {
    rank: &'a str,
    username: String,
    approval: String,
    votes: String,
    voter_count: String,
}

impl<'a> From<&'a DelegateRow> for RowView<'a> {
    fn from(row: &'a DelegateRow) -> Self {
        Self {
            rank: &row.rank,
            username: format!("{:<25}", row.username),
            approval: format!("{:<4}", row.approval_percent),
            votes: format!("{:>10}", row.vote_balance_display),
            voter_count: format!("{:>5}", row.voter_count),
        }
    }
}

/// Renders reports through the bundled text template.
pub struct ReportRenderer {
    tera: Tera,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE, include_str!("../templates/index.txt"))?;
        Ok(Self { tera })
    }

    pub fn render(&self, report: &Report, client: &NetworkClient) -> Result<String, tera::Error> {
        self.tera.render(TEMPLATE, &view_context(report, client))
    }
}

fn view_context(report: &Report, client: &NetworkClient) -> Context {
    fn rows(rows: &[DelegateRow]) -> Vec<RowView<'_>> {
        rows.iter().map(RowView::from).collect()
    }

    let mut context = Context::new();
    context.insert("client", client);
    context.insert("height", &report.height);
    context.insert("vote_header", &format!("{:>10}", client.vote_label()));
    context.insert("active_delegates_count", &report.active_delegate_count);
    context.insert("active_delegates", &rows(&report.active_delegates));
    context.insert("standby_delegates", &rows(&report.standby_delegates));
    context.insert("voters", &report.voter_count);
    context.insert("supply", &report.supply_display);
    context.insert("total_votes", &report.total_votes_display);
    context.insert("percentage", &report.participation_percent);
    context
}

#[cfg(test)]
mod tests {
    use super::*;
    use vote_report_types::Amount;

    fn row(rank: &str, username: &str, approval: &str, votes: &str, voters: &str) -> DelegateRow {
        DelegateRow {
            rank: rank.into(),
            username: username.into(),
            approval_percent: approval.into(),
            vote_balance_display: votes.into(),
            voter_count: voters.into(),
        }
    }

    fn report() -> Report {
        Report {
            height: 4_242,
            active_delegate_count: 1,
            active_delegates: vec![row("01", "alice", "25.00", "250", "2")],
            standby_delegates: vec![row("02", "bob", "5.00", "50", "1")],
            voter_count: "3".into(),
            supply_display: "1,000".into(),
            total_votes_display: "300".into(),
            participation_percent: "30".into(),
            voters: 3,
            total_votes: Amount::from_tokens(300),
            supply: Amount::from_tokens(1_000),
        }
    }

    #[test]
    fn pads_columns() {
        let r = row("01", "alice", "1.5", "1,234", "12");
        let view = RowView::from(&r);
        assert_eq!(view.username.len(), 25);
        assert!(view.username.starts_with("alice "));
        assert_eq!(view.approval, "1.5 ");
        assert_eq!(view.votes, "     1,234");
        assert_eq!(view.voter_count, "   12");
    }

    #[test]
    fn long_values_are_not_truncated() {
        let name = "a".repeat(30);
        let r = row("01", &name, "100.00", "12,345,678,901", "123,456");
        let view = RowView::from(&r);
        assert_eq!(view.username, name);
        assert_eq!(view.approval, "100.00");
        assert_eq!(view.votes, "12,345,678,901");
    }

    #[test]
    fn renders_both_sections_and_totals() {
        let renderer = ReportRenderer::new().unwrap();
        let text = renderer.render(&report(), &NetworkClient::default()).unwrap();

        assert!(text.starts_with("TOKEN Vote Report at height 4242"));
        assert!(text.contains("Active Delegates (1)"));
        assert!(text.contains(" Vote TOKEN Voters"));
        assert!(text.contains(&format!("01    {:<25} 25.00%", "alice")));
        assert!(text.contains(&format!("02    {:<25} 5.00%", "bob")));
        assert!(text.contains("Voters:      3"));
        assert!(text.contains("Supply:      1,000 T"));
        assert!(text.contains("Total Votes: 300 T (30% of supply)"));
        assert!(!text.contains("Explorer"));
    }

    #[test]
    fn explorer_line_when_configured() {
        let client = NetworkClient {
            token: "ARK".into(),
            symbol: "Ѧ".into(),
            explorer: "https://explorer.example".into(),
        };
        let text = ReportRenderer::new()
            .unwrap()
            .render(&report(), &client)
            .unwrap();
        assert!(text.contains("Explorer:    https://explorer.example"));
        assert!(text.contains("1,000 Ѧ"));
    }
}
