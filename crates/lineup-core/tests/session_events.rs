//! Mutation events on a lineup session: filters, formations and assignments.

mod common;

use common::{VALID_442, key, pick_all, roster, session_442};
use lineup_core::{LineupSession, SessionStore};
use lineup_model::{FormationCatalog, LineupError, LineupOptions, TeamFilter};

#[test]
fn session_starts_on_default_formation_with_roster_price_range() {
    let session = LineupSession::new(
        roster(),
        FormationCatalog::default(),
        LineupOptions::default(),
    )
    .expect("session");
    assert_eq!(session.formation().name, "532");
    assert_eq!(session.filter().price_min, 6.5);
    assert_eq!(session.filter().price_max, 37.0);
    assert_eq!(session.filter().team, TeamFilter::All);
    let view = session.view().expect("view");
    assert_eq!(view.slots.len(), 11);
    assert_eq!(view.budget.remaining, 250.0);
}

#[test]
fn team_filter_never_removes_existing_selection() {
    let mut session = session_442();
    session
        .assign(key("DEFENSE_1"), "Def A")
        .expect("assign Def A");

    let view = session
        .set_team_filter(TeamFilter::parse("Gamma"))
        .expect("team filter");
    let slot = view.slot(&key("DEFENSE_1")).expect("slot");
    assert_eq!(slot.selected.as_deref(), Some("Def A"));
    assert_eq!(slot.price, Some(20.0));
    // Gamma defenders first, carried-over selection appended.
    assert_eq!(slot.options, vec!["Def C", "Def A"]);
    // Other defense slots only offer the filtered candidates.
    let other = view.slot(&key("DEFENSE_2")).expect("slot");
    assert_eq!(other.options, vec!["Def C"]);
    assert_eq!(view.budget.total_spent, 20.0);
}

#[test]
fn price_filter_never_removes_existing_selection() {
    let mut session = session_442();
    pick_all(&mut session, &VALID_442);
    let view = session.set_price_range(0.0, 10.0).expect("price filter");
    assert_eq!(view.filled_slots(), 11);
    assert_eq!(view.budget.remaining, 1.5);
    let forward = view.slot(&key("FORWARD_2")).expect("slot");
    assert_eq!(forward.options, vec!["Fwd B"]);
}

#[test]
fn carried_selection_is_not_duplicated_in_options() {
    let mut session = session_442();
    let view = session.assign(key("MIDFIELD_1"), "Mid A").expect("assign");
    let slot = view.slot(&key("MIDFIELD_1")).expect("slot");
    assert_eq!(
        slot.options,
        vec!["Mid A", "Mid B", "Mid C", "Mid D", "Mid E"]
    );
}

#[test]
fn formation_change_ignores_slots_not_in_new_formation() {
    let mut session = session_442();
    pick_all(&mut session, &VALID_442);

    let view = session.select_formation("532").expect("532");
    assert_eq!(view.formation, "532");
    assert!(view.slot(&key("MIDFIELD_4")).is_none());
    assert!(view.slot(&key("DEFENSE_5")).expect("slot").selected.is_none());
    assert_eq!(view.filled_slots(), 10);
    assert!(!view.is_complete);
    // Mid D (21) sits outside 532 and is not charged.
    assert_eq!(view.budget.total_spent, 227.5);
    assert_eq!(session.store().get(&key("MIDFIELD_4")), Some("Mid D"));

    let view = session.select_formation("442").expect("442");
    assert_eq!(
        view.slot(&key("MIDFIELD_4")).expect("slot").selected.as_deref(),
        Some("Mid D")
    );
    assert_eq!(view.filled_slots(), 11);
    assert_eq!(view.budget.remaining, 1.5);
    assert!(view.status.is_valid());
}

#[test]
fn unknown_formation_leaves_session_unchanged() {
    let mut session = session_442();
    let err = session.select_formation("4-2-4").unwrap_err();
    assert_eq!(
        err,
        LineupError::UnknownFormation {
            name: "4-2-4".to_string()
        }
    );
    assert_eq!(session.formation().name, "442");
}

#[test]
fn assignment_replaces_previous_occupant() {
    let mut session = session_442();
    session.assign(key("FORWARD_1"), "Fwd A").expect("first");
    let view = session.assign(key("FORWARD_1"), "Fwd C").expect("second");
    let slot = view.slot(&key("FORWARD_1")).expect("slot");
    assert_eq!(slot.selected.as_deref(), Some("Fwd C"));
    assert_eq!(view.budget.total_spent, 11.0);
}

#[test]
fn rejected_assignments_leave_store_untouched() {
    let mut session = session_442();
    session.assign(key("FORWARD_1"), "Fwd A").expect("assign");

    assert!(matches!(
        session.assign(key("FORWARD_1"), "Mid A"),
        Err(LineupError::PositionMismatch { .. })
    ));
    assert!(matches!(
        session.assign(key("FORWARD_1"), "Nobody"),
        Err(LineupError::PlayerNotFound { .. })
    ));
    assert!(matches!(
        session.assign(key("FORWARD_3"), "Fwd B"),
        Err(LineupError::UnknownSlot { .. })
    ));
    session
        .set_team_filter(TeamFilter::parse("Alpha"))
        .expect("team filter");
    assert!(matches!(
        session.assign(key("FORWARD_1"), "Fwd B"),
        Err(LineupError::NotOffered { .. })
    ));

    assert_eq!(session.store().get(&key("FORWARD_1")), Some("Fwd A"));
    assert!(session.store().get(&key("FORWARD_3")).is_none());
}

#[test]
fn reassigning_carried_selection_is_allowed_under_filter() {
    let mut session = session_442();
    session.assign(key("FORWARD_1"), "Fwd B").expect("assign");
    session
        .set_team_filter(TeamFilter::parse("Alpha"))
        .expect("team filter");
    let view = session
        .assign(key("FORWARD_1"), "Fwd B")
        .expect("carried option");
    assert_eq!(
        view.slot(&key("FORWARD_1")).expect("slot").selected.as_deref(),
        Some("Fwd B")
    );
}

#[test]
fn clear_empties_slot_and_validates_key() {
    let mut session = session_442();
    pick_all(&mut session, &VALID_442);
    let view = session.clear(key("GOALKEEPER_1")).expect("clear");
    assert!(!view.is_complete);
    assert_eq!(view.budget.total_spent, 236.5);
    assert!(matches!(
        session.clear(key("GOALKEEPER_2")),
        Err(LineupError::UnknownSlot { .. })
    ));
}

#[test]
fn invalid_price_range_is_rejected() {
    let mut session = session_442();
    let err = session.set_price_range(30.0, 10.0).unwrap_err();
    assert!(matches!(err, LineupError::InvalidPriceRange { .. }));
    assert_eq!(session.filter().price_min, 6.5);
}

#[test]
fn options_lists_offered_players() {
    let mut session = session_442();
    session.set_price_range(10.0, 20.0).expect("price filter");
    assert_eq!(
        session.options(key("GOALKEEPER_1")).expect("options"),
        vec!["Keeper A", "Keeper C"]
    );
    assert!(session.options(key("GOALKEEPER_2")).is_err());
}
