//! Roster ingestion for the lineup planner.

pub mod error;
pub mod roster_csv;

pub use error::IngestError;
pub use roster_csv::{
    IngestOptions, parse_price, read_roster, read_roster_from_str, read_roster_with_options,
};
