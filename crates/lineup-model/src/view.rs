//! Derived, immutable snapshot of a lineup after an interaction.

use serde::{Deserialize, Serialize};

use crate::filter::FilterCriteria;
use crate::player::Player;
use crate::position::Zone;
use crate::slot::SlotKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupStatus {
    /// At least one slot is empty.
    Incomplete,
    /// Every slot is filled but the remaining budget is negative.
    OverBudget,
    /// Every slot is filled within budget.
    Valid,
}

impl LineupStatus {
    pub fn from_parts(is_complete: bool, remaining: f64) -> Self {
        if !is_complete {
            LineupStatus::Incomplete
        } else if remaining < 0.0 {
            LineupStatus::OverBudget
        } else {
            LineupStatus::Valid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, LineupStatus::Valid)
    }

    /// Message shown under the budget line.
    pub fn message(&self) -> &'static str {
        match self {
            LineupStatus::Valid => "Lineup complete within budget.",
            LineupStatus::Incomplete | LineupStatus::OverBudget => {
                "Players missing or budget exceeded."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
}

impl BudgetSummary {
    pub fn new(budget: f64, total_spent: f64) -> Self {
        Self {
            budget,
            total_spent,
            remaining: budget - total_spent,
        }
    }

    pub fn is_exceeded(&self) -> bool {
        self.remaining < 0.0
    }
}

/// One formation slot as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotView {
    pub key: SlotKey,
    /// Offered player names: filtered candidates plus a carried-over selection.
    pub options: Vec<String>,
    pub selected: Option<String>,
    /// Price of the selected player.
    pub price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBudget {
    pub zone: Zone,
    pub total: f64,
    /// Share of the selected players' combined price, in percent.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamCount {
    pub team: String,
    pub players: usize,
}

/// Summary statistics, only produced for a valid lineup.
///
/// Computed over distinct selected players: a player occupying two slots
/// appears once here even though the budget counts them twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupStatistics {
    /// Ascending by price; ties keep roster order.
    pub players_by_price: Vec<Player>,
    pub budget_by_zone: Vec<ZoneBudget>,
    pub most_expensive: Player,
    pub most_frequent_team: String,
    /// Descending by count; ties keep first appearance in roster order.
    pub players_per_team: Vec<TeamCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupView {
    pub formation: String,
    pub filter: FilterCriteria,
    pub slots: Vec<SlotView>,
    pub budget: BudgetSummary,
    pub is_complete: bool,
    pub status: LineupStatus,
    pub statistics: Option<LineupStatistics>,
}

impl LineupView {
    pub fn slot(&self, key: &SlotKey) -> Option<&SlotView> {
        self.slots.iter().find(|slot| slot.key == *key)
    }

    pub fn filled_slots(&self) -> usize {
        self.slots.iter().filter(|slot| slot.selected.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_parts() {
        assert_eq!(LineupStatus::from_parts(false, 10.0), LineupStatus::Incomplete);
        assert_eq!(LineupStatus::from_parts(false, -10.0), LineupStatus::Incomplete);
        assert_eq!(LineupStatus::from_parts(true, -0.5), LineupStatus::OverBudget);
        assert_eq!(LineupStatus::from_parts(true, 0.0), LineupStatus::Valid);
    }

    #[test]
    fn budget_remaining() {
        let budget = BudgetSummary::new(250.0, 248.5);
        assert_eq!(budget.remaining, 1.5);
        assert!(!budget.is_exceeded());
        assert!(BudgetSummary::new(250.0, 255.0).is_exceeded());
    }
}
