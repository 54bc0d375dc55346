use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LineupError, Result};
use crate::player::Player;

/// Team constraint of the roster filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

impl TeamFilter {
    /// Parses selector input; `All` (or the Spanish `Todos`) clears the constraint.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("todos")
        {
            TeamFilter::All
        } else {
            TeamFilter::Team(trimmed.to_string())
        }
    }

    pub fn matches(&self, team: &str) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Team(expected) => expected == team,
        }
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamFilter::All => write!(f, "All"),
            TeamFilter::Team(team) => write!(f, "{team}"),
        }
    }
}

/// Criteria deciding which players are offered for new selections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub price_min: f64,
    pub price_max: f64,
    pub team: TeamFilter,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl FilterCriteria {
    /// Inclusive price range with no team constraint.
    pub fn new(price_min: f64, price_max: f64) -> Result<Self> {
        validate_range(price_min, price_max)?;
        Ok(Self {
            price_min,
            price_max,
            team: TeamFilter::All,
        })
    }

    pub fn unbounded() -> Self {
        Self {
            price_min: 0.0,
            price_max: f64::INFINITY,
            team: TeamFilter::All,
        }
    }

    #[must_use]
    pub fn with_team(mut self, team: TeamFilter) -> Self {
        self.team = team;
        self
    }

    pub fn set_price_range(&mut self, price_min: f64, price_max: f64) -> Result<()> {
        validate_range(price_min, price_max)?;
        self.price_min = price_min;
        self.price_max = price_max;
        Ok(())
    }

    pub fn matches(&self, player: &Player) -> bool {
        player.price >= self.price_min && player.price <= self.price_max && self.team.matches(&player.team)
    }
}

fn validate_range(min: f64, max: f64) -> Result<()> {
    if min.is_nan() || max.is_nan() || min > max {
        return Err(LineupError::InvalidPriceRange { min, max });
    }
    Ok(())
}
