//! Shared roster fixture for lineup-core integration tests.

#![allow(dead_code)]

use lineup_core::{LineupSession, RosterStore};
use lineup_model::{FormationCatalog, LineupOptions, Player, Position, SlotKey};

pub fn roster() -> RosterStore {
    RosterStore::new(vec![
        Player::new("Keeper A", Position::Goalkeeper, "Alpha", 12.0),
        Player::new("Keeper B", Position::Goalkeeper, "Beta", 6.5),
        Player::new("Keeper C", Position::Goalkeeper, "Delta", 18.5),
        Player::new("Def A", Position::Defense, "Alpha", 20.0),
        Player::new("Def B", Position::Defense, "Beta", 18.5),
        Player::new("Def C", Position::Defense, "Gamma", 15.0),
        Player::new("Def D", Position::Defense, "Alpha", 22.0),
        Player::new("Def E", Position::Defense, "Delta", 9.0),
        Player::new("Mid A", Position::Midfield, "Beta", 25.0),
        Player::new("Mid B", Position::Midfield, "Alpha", 24.0),
        Player::new("Mid C", Position::Midfield, "Gamma", 19.0),
        Player::new("Mid D", Position::Midfield, "Beta", 21.0),
        Player::new("Mid E", Position::Midfield, "Delta", 7.5),
        Player::new("Fwd A", Position::Forward, "Alpha", 35.0),
        Player::new("Fwd B", Position::Forward, "Gamma", 37.0),
        Player::new("Fwd C", Position::Forward, "Beta", 11.0),
    ])
}

pub fn key(raw: &str) -> SlotKey {
    raw.parse().expect("slot key")
}

/// Eleven distinct players for a 442 whose prices sum to 248.5.
pub const VALID_442: [(&str, &str); 11] = [
    ("GOALKEEPER_1", "Keeper A"),
    ("DEFENSE_1", "Def A"),
    ("DEFENSE_2", "Def B"),
    ("DEFENSE_3", "Def C"),
    ("DEFENSE_4", "Def D"),
    ("MIDFIELD_1", "Mid A"),
    ("MIDFIELD_2", "Mid B"),
    ("MIDFIELD_3", "Mid C"),
    ("MIDFIELD_4", "Mid D"),
    ("FORWARD_1", "Fwd A"),
    ("FORWARD_2", "Fwd B"),
];

pub fn session_442() -> LineupSession {
    let mut session = LineupSession::new(
        roster(),
        FormationCatalog::default(),
        LineupOptions::default(),
    )
    .expect("session");
    session.select_formation("442").expect("442");
    session
}

pub fn pick_all(session: &mut LineupSession, picks: &[(&str, &str)]) {
    for (slot, player) in picks {
        session.assign(key(slot), player).expect("assign");
    }
}
