//! Data model for the lineup budget planner.

pub mod error;
pub mod filter;
pub mod formation;
pub mod options;
pub mod player;
pub mod position;
pub mod slot;
pub mod view;

pub use error::{LineupError, Result};
pub use filter::{FilterCriteria, TeamFilter};
pub use formation::{Formation, FormationCatalog};
pub use options::{DEFAULT_BUDGET, LineupOptions};
pub use player::Player;
pub use position::{Position, Zone};
pub use slot::SlotKey;
pub use view::{
    BudgetSummary, LineupStatistics, LineupStatus, LineupView, SlotView, TeamCount, ZoneBudget,
};
