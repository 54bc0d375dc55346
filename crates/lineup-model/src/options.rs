//! Options controlling budget evaluation.

use serde::{Deserialize, Serialize};

/// Budget available to a lineup when no configuration overrides it.
pub const DEFAULT_BUDGET: f64 = 250.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineupOptions {
    /// Total budget in the roster's price units.
    pub budget: f64,
}

impl Default for LineupOptions {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
        }
    }
}

impl LineupOptions {
    #[must_use]
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }
}
