use thiserror::Error;

/// Errors raised while deriving a lineup view or applying a selection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineupError {
    #[error("unknown formation: {name}")]
    UnknownFormation { name: String },

    #[error("slot {key} is not part of formation {formation}")]
    UnknownSlot { key: String, formation: String },

    #[error("invalid slot key: {raw} (expected POSITION_INDEX, e.g. DEFENSE_2)")]
    InvalidSlotKey { raw: String },

    #[error("unknown position: {raw}")]
    UnknownPosition { raw: String },

    #[error("player not found in roster: {name}")]
    PlayerNotFound { name: String },

    #[error("player {player} plays {actual}, slot {slot} requires {expected}")]
    PositionMismatch {
        player: String,
        slot: String,
        expected: String,
        actual: String,
    },

    #[error("player {player} is not offered for slot {slot} under the current filter")]
    NotOffered { player: String, slot: String },

    #[error("invalid price range: {min} to {max}")]
    InvalidPriceRange { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, LineupError>;
