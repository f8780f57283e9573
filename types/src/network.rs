//! Network client descriptor.

use serde::{Deserialize, Serialize};

/// Identifies the token a report is rendered for.
///
/// Shown in report headers only; it never affects the computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkClient {
    /// Token name, e.g. used in the "Vote <token>" column header.
    pub token: String,
    /// Currency symbol printed next to amounts.
    pub symbol: String,
    /// Block explorer base URL; empty when unknown.
    pub explorer: String,
}

impl NetworkClient {
    /// Header label for the vote balance column.
    pub fn vote_label(&self) -> String {
        format!("Vote {}", self.token)
    }
}

impl Default for NetworkClient {
    fn default() -> Self {
        Self {
            token: "TOKEN".to_string(),
            symbol: "T".to_string(),
            explorer: String::new(),
        }
    }
}
