//! Active delegate seats per height.

use serde::{Deserialize, Serialize};

use crate::StoreError;
use vote_report_types::DEFAULT_ACTIVE_DELEGATES;

/// Supplies the number of active delegate seats in force at a height.
pub trait RoundCalculator: Send + Sync {
    fn active_delegate_count_at(&self, height: u64) -> Result<u32, StoreError>;
}

/// A height from which a given number of active delegates applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub height: u64,
    pub active_delegates: u32,
}

/// Round calculator backed by a static milestone table.
///
/// The count at a height is taken from the last milestone whose height is
/// at or below it.
#[derive(Clone, Debug)]
pub struct MilestoneRounds {
    /// Sorted ascending by height.
    milestones: Vec<Milestone>,
}

impl MilestoneRounds {
    pub fn new(mut milestones: Vec<Milestone>) -> Self {
        milestones.sort_by_key(|m| m.height);
        Self { milestones }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }
}

impl Default for MilestoneRounds {
    fn default() -> Self {
        Self::new(vec![Milestone {
            height: 1,
            active_delegates: DEFAULT_ACTIVE_DELEGATES,
        }])
    }
}

impl RoundCalculator for MilestoneRounds {
    fn active_delegate_count_at(&self, height: u64) -> Result<u32, StoreError> {
        self.milestones
            .iter()
            .rev()
            .find(|m| m.height <= height)
            .map(|m| m.active_delegates)
            .ok_or_else(|| StoreError::NotFound(format!("no milestone at or below height {height}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(height: u64, active_delegates: u32) -> Milestone {
        Milestone {
            height,
            active_delegates,
        }
    }

    #[test]
    fn default_table_has_51_seats() {
        let rounds = MilestoneRounds::default();
        assert_eq!(rounds.active_delegate_count_at(1).unwrap(), 51);
        assert_eq!(rounds.active_delegate_count_at(9_000_000).unwrap(), 51);
    }

    #[test]
    fn latest_milestone_at_or_below_height_wins() {
        let rounds = MilestoneRounds::new(vec![
            milestone(1_000, 53),
            milestone(1, 51),
            milestone(5_000, 55),
        ]);
        assert_eq!(rounds.active_delegate_count_at(999).unwrap(), 51);
        assert_eq!(rounds.active_delegate_count_at(1_000).unwrap(), 53);
        assert_eq!(rounds.active_delegate_count_at(4_999).unwrap(), 53);
        assert_eq!(rounds.active_delegate_count_at(5_000).unwrap(), 55);
    }

    #[test]
    fn height_before_first_milestone_is_not_found() {
        let rounds = MilestoneRounds::new(vec![milestone(10, 51)]);
        assert!(matches!(
            rounds.active_delegate_count_at(9),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn empty_table_is_not_found() {
        let rounds = MilestoneRounds::new(Vec::new());
        assert!(rounds.active_delegate_count_at(1).is_err());
    }

    #[test]
    fn milestones_parse_from_toml() {
        #[derive(Deserialize)]
        struct Table {
            milestones: Vec<Milestone>,
        }
        let table: Table = toml::from_str(
            r#"
            [[milestones]]
            height = 1
            active_delegates = 51

            [[milestones]]
            height = 75600
            active_delegates = 53
            "#,
        )
        .unwrap();
        let rounds = MilestoneRounds::new(table.milestones);
        assert_eq!(rounds.active_delegate_count_at(80_000).unwrap(), 53);
    }
}
