//! Formation templates and the catalog a session chooses from.

use serde::{Deserialize, Serialize};

use crate::error::{LineupError, Result};
use crate::position::Position;
use crate::slot::SlotKey;

/// Named template of required slot counts per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    pub name: String,
    /// Slot counts in canonical position order; every position is present.
    pub counts: Vec<(Position, usize)>,
}

impl Formation {
    pub fn new(
        name: impl Into<String>,
        goalkeeper: usize,
        defense: usize,
        midfield: usize,
        forward: usize,
    ) -> Self {
        Self {
            name: name.into(),
            counts: vec![
                (Position::Goalkeeper, goalkeeper),
                (Position::Defense, defense),
                (Position::Midfield, midfield),
                (Position::Forward, forward),
            ],
        }
    }

    pub fn count(&self, position: Position) -> usize {
        self.counts
            .iter()
            .find(|(candidate, _)| *candidate == position)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Total number of slots (not required to be 11).
    pub fn total_slots(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Slot keys in display order: position by position, index ascending.
    pub fn slot_keys(&self) -> Vec<SlotKey> {
        self.counts
            .iter()
            .flat_map(|(position, count)| (1..=*count).map(|index| SlotKey::new(*position, index)))
            .collect()
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        key.index >= 1 && key.index <= self.count(key.position)
    }
}

/// Ordered set of formations; the first entry is the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationCatalog {
    formations: Vec<Formation>,
}

impl Default for FormationCatalog {
    fn default() -> Self {
        Self {
            formations: vec![
                Formation::new("532", 1, 5, 3, 2),
                Formation::new("433", 1, 4, 3, 3),
                Formation::new("442", 1, 4, 4, 2),
            ],
        }
    }
}

impl FormationCatalog {
    pub fn new(formations: Vec<Formation>) -> Self {
        Self { formations }
    }

    pub fn formations(&self) -> &[Formation] {
        &self.formations
    }

    pub fn names(&self) -> Vec<&str> {
        self.formations.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Result<&Formation> {
        let name = name.trim();
        self.formations
            .iter()
            .find(|formation| formation.name == name)
            .ok_or_else(|| LineupError::UnknownFormation {
                name: name.to_string(),
            })
    }

    pub fn default_formation(&self) -> Option<&Formation> {
        self.formations.first()
    }

    /// Adds a formation, replacing an existing one with the same name in place.
    pub fn upsert(&mut self, formation: Formation) {
        match self
            .formations
            .iter_mut()
            .find(|existing| existing.name == formation.name)
        {
            Some(existing) => *existing = formation,
            None => self.formations.push(formation),
        }
    }

    /// Moves the named formation to the front so it becomes the default.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let index = self
            .formations
            .iter()
            .position(|formation| formation.name == name)
            .ok_or_else(|| LineupError::UnknownFormation {
                name: name.to_string(),
            })?;
        let formation = self.formations.remove(index);
        self.formations.insert(0, formation);
        Ok(())
    }
}
