use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::LineupError;
use crate::position::Position;

/// Identifier of one required pick within a formation.
///
/// Rendered as `{POSITION}_{index}` with a 1-based index, e.g. `DEFENSE_3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub position: Position,
    pub index: usize,
}

impl SlotKey {
    pub fn new(position: Position, index: usize) -> Self {
        Self { position, index }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.position.as_code(), self.index)
    }
}

impl FromStr for SlotKey {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LineupError::InvalidSlotKey { raw: s.to_string() };
        let (position, index) = s.trim().rsplit_once('_').ok_or_else(invalid)?;
        let position = position.parse::<Position>().map_err(|_| invalid())?;
        let index = index.parse::<usize>().map_err(|_| invalid())?;
        if index == 0 {
            return Err(invalid());
        }
        Ok(SlotKey { position, index })
    }
}

impl Serialize for SlotKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SlotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
