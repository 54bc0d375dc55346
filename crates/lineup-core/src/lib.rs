//! Lineup selection and budget engine.
//!
//! - [`RosterStore`]: immutable player table and its filter queries.
//! - [`SessionStore`]: injected, session-scoped slot selections.
//! - [`LineupEngine`]: pure derivation of a [`lineup_model::LineupView`].
//! - [`LineupSession`]: mutation events, each returning a new view.

pub mod engine;
pub mod roster;
pub mod session;
pub mod stats;
pub mod store;

pub use engine::LineupEngine;
pub use roster::RosterStore;
pub use session::LineupSession;
pub use stats::{compute_statistics, selected_players};
pub use store::{MemorySessionStore, SessionStore};
