use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One row of the roster table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player name; also the selection identifier.
    pub name: String,
    pub position: Position,
    pub team: String,
    /// Non-negative price in budget units (millions).
    pub price: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        position: Position,
        team: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            team: team.into(),
            price,
        }
    }
}
