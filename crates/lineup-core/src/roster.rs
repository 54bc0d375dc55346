//! Immutable player table and the queries the engine runs against it.

use std::collections::HashMap;

use lineup_model::{FilterCriteria, LineupError, Player, Position, Result};

#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    players: Vec<Player>,
    by_name: HashMap<String, usize>,
}

impl RosterStore {
    /// Builds the store; on repeated names the first row wins lookups.
    pub fn new(players: Vec<Player>) -> Self {
        let mut by_name = HashMap::with_capacity(players.len());
        for (idx, player) in players.iter().enumerate() {
            by_name.entry(player.name.clone()).or_insert(idx);
        }
        Self { players, by_name }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|idx| &self.players[*idx])
    }

    /// Row index of a player, used to keep table order in derived lists.
    pub fn row_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    /// Names of players in `position` offered under `criteria`, in table order.
    pub fn filter(&self, position: Position, criteria: &FilterCriteria) -> Vec<&str> {
        self.players
            .iter()
            .filter(|player| player.position == position && criteria.matches(player))
            .map(|player| player.name.as_str())
            .collect()
    }

    /// Names of every player in `position`, ignoring any filter.
    pub fn all_names(&self, position: Position) -> Vec<&str> {
        self.players
            .iter()
            .filter(|player| player.position == position)
            .map(|player| player.name.as_str())
            .collect()
    }

    pub fn lookup_price(&self, name: &str) -> Result<f64> {
        self.get(name)
            .map(|player| player.price)
            .ok_or_else(|| LineupError::PlayerNotFound {
                name: name.to_string(),
            })
    }

    /// Distinct team names in order of first appearance.
    pub fn teams(&self) -> Vec<&str> {
        let mut teams: Vec<&str> = Vec::new();
        for player in &self.players {
            if !teams.contains(&player.team.as_str()) {
                teams.push(player.team.as_str());
            }
        }
        teams
    }

    /// Cheapest and most expensive price in the table.
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let mut prices = self.players.iter().map(|player| player.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        }))
    }

    /// Filter spanning the whole price range with no team constraint.
    pub fn default_filter(&self) -> FilterCriteria {
        match self.price_bounds() {
            Some((min, max)) => FilterCriteria {
                price_min: min,
                price_max: max,
                ..FilterCriteria::unbounded()
            },
            None => FilterCriteria::unbounded(),
        }
    }
}
