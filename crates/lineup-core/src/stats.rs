//! Summary statistics for a valid lineup.
//!
//! Statistics run over the distinct selected roster rows. A player sitting
//! in two slots is charged twice by the budget but counted once here.

use std::collections::HashSet;

use lineup_model::{
    LineupError, LineupStatistics, Player, Position, Result, SlotView, TeamCount, ZoneBudget,
};

use crate::roster::RosterStore;

/// Distinct selected players in roster order.
pub fn selected_players<'a>(roster: &'a RosterStore, slots: &[SlotView]) -> Result<Vec<&'a Player>> {
    let mut names = HashSet::new();
    for slot in slots {
        if let Some(name) = slot.selected.as_deref() {
            if roster.get(name).is_none() {
                return Err(LineupError::PlayerNotFound {
                    name: name.to_string(),
                });
            }
            names.insert(name);
        }
    }
    Ok(roster
        .players()
        .iter()
        .filter(|player| names.contains(player.name.as_str()))
        .collect())
}

/// Returns `None` when no slot is filled.
pub fn compute_statistics(
    roster: &RosterStore,
    slots: &[SlotView],
) -> Result<Option<LineupStatistics>> {
    let players = selected_players(roster, slots)?;
    let Some(most_expensive) = most_expensive(&players) else {
        return Ok(None);
    };
    let players_per_team = players_per_team(&players);
    let most_frequent_team = most_frequent_team(&players_per_team);

    Ok(Some(LineupStatistics {
        players_by_price: players_by_price(&players),
        budget_by_zone: budget_by_zone(&players),
        most_expensive: most_expensive.clone(),
        most_frequent_team,
        players_per_team,
    }))
}

fn players_by_price(players: &[&Player]) -> Vec<Player> {
    let mut ordered: Vec<Player> = players.iter().map(|player| (*player).clone()).collect();
    ordered.sort_by(|a, b| a.price.total_cmp(&b.price));
    ordered
}

fn most_expensive<'a>(players: &[&'a Player]) -> Option<&'a Player> {
    let mut best: Option<&Player> = None;
    for &player in players {
        match best {
            Some(current) if player.price <= current.price => {}
            _ => best = Some(player),
        }
    }
    best
}

fn budget_by_zone(players: &[&Player]) -> Vec<ZoneBudget> {
    let grand_total: f64 = players.iter().map(|player| player.price).sum();
    Position::ALL
        .iter()
        .filter_map(|position| {
            let in_zone: Vec<&&Player> = players
                .iter()
                .filter(|player| player.position == *position)
                .collect();
            if in_zone.is_empty() {
                return None;
            }
            let total: f64 = in_zone.iter().map(|player| player.price).sum();
            let share = if grand_total > 0.0 {
                total / grand_total * 100.0
            } else {
                0.0
            };
            Some(ZoneBudget {
                zone: position.zone(),
                total,
                share,
            })
        })
        .collect()
}

fn players_per_team(players: &[&Player]) -> Vec<TeamCount> {
    let mut counts: Vec<TeamCount> = Vec::new();
    for player in players {
        match counts.iter_mut().find(|entry| entry.team == player.team) {
            Some(entry) => entry.players += 1,
            None => counts.push(TeamCount {
                team: player.team.clone(),
                players: 1,
            }),
        }
    }
    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.players.cmp(&a.players));
    counts
}

/// Team with the highest count; ties go to the alphabetically first name.
fn most_frequent_team(counts: &[TeamCount]) -> String {
    let top = counts.first().map_or(0, |entry| entry.players);
    counts
        .iter()
        .filter(|entry| entry.players == top)
        .map(|entry| entry.team.as_str())
        .min()
        .unwrap_or_default()
        .to_string()
}
