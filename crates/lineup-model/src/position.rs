//! Position categories and the display zones they map to.
//!
//! Spreadsheet rosters often use Spanish category
//! names (`PORTERO`, `DEFENSA`, `MEDIOCENTRO`, `DELANTERO`); both those and
//! the usual English abbreviations are accepted when parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineupError;

/// Position category of a player and of a formation slot.
///
/// Declaration order is the canonical display order and drives `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    Goalkeeper,
    Defense,
    Midfield,
    Forward,
}

impl Position {
    /// All positions in canonical order.
    pub const ALL: [Position; 4] = [
        Position::Goalkeeper,
        Position::Defense,
        Position::Midfield,
        Position::Forward,
    ];

    /// Returns the code used in slot keys (`GOALKEEPER_1`).
    pub fn as_code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GOALKEEPER",
            Position::Defense => "DEFENSE",
            Position::Midfield => "MIDFIELD",
            Position::Forward => "FORWARD",
        }
    }

    /// Returns the zone this position is charted under.
    pub fn zone(&self) -> Zone {
        match self {
            Position::Goalkeeper => Zone::Goalkeeper,
            Position::Defense => Zone::Defense,
            Position::Midfield => Zone::Midfield,
            Position::Forward => Zone::Forward,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Position {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "GOALKEEPER" | "GK" | "POR" | "PORTERO" => Ok(Position::Goalkeeper),
            "DEFENSE" | "DEFENCE" | "DEFENDER" | "DEF" | "DF" | "DEFENSA" => Ok(Position::Defense),
            "MIDFIELD" | "MIDFIELDER" | "MID" | "MF" | "MEDIOCENTRO" | "CENTROCAMPISTA" => {
                Ok(Position::Midfield)
            }
            "FORWARD" | "FWD" | "FW" | "ST" | "STRIKER" | "DELANTERO" => Ok(Position::Forward),
            _ => Err(LineupError::UnknownPosition { raw: s.to_string() }),
        }
    }
}

/// Area of the pitch used to group budget in the statistics section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Zone {
    Goalkeeper,
    Defense,
    Midfield,
    Forward,
}

impl Zone {
    pub fn label(&self) -> &'static str {
        match self {
            Zone::Goalkeeper => "Goalkeeper",
            Zone::Defense => "Defense",
            Zone::Midfield => "Midfield",
            Zone::Forward => "Forward",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_aliases() {
        assert_eq!("goalkeeper".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!(" PORTERO ".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("Defensa".parse::<Position>().unwrap(), Position::Defense);
        assert_eq!("MEDIOCENTRO".parse::<Position>().unwrap(), Position::Midfield);
        assert_eq!("st".parse::<Position>().unwrap(), Position::Forward);
    }

    #[test]
    fn rejects_unknown_position() {
        let err = "LIBERO".parse::<Position>().unwrap_err();
        assert_eq!(
            err,
            LineupError::UnknownPosition {
                raw: "LIBERO".to_string()
            }
        );
    }

    #[test]
    fn zones_map_one_to_one() {
        let zones: Vec<Zone> = Position::ALL.iter().map(Position::zone).collect();
        assert_eq!(
            zones,
            vec![Zone::Goalkeeper, Zone::Defense, Zone::Midfield, Zone::Forward]
        );
        assert_eq!(Position::Midfield.zone().label(), "Midfield");
    }

    #[test]
    fn canonical_order() {
        assert!(Position::Goalkeeper < Position::Defense);
        assert!(Position::Midfield < Position::Forward);
    }
}
