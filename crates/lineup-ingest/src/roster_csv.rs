//! Roster CSV loading.
//!
//! The roster is read once at startup and validated eagerly: a missing
//! column, an unknown position, a bad price or a repeated player name
//! rejects the whole file instead of failing later at the point of use.

use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use lineup_model::{Player, Position};

use crate::error::IngestError;

const PLAYER_COLUMN: &str = "Player";
const POSITION_COLUMN: &str = "Position";
const TEAM_COLUMN: &str = "Team";
const PRICE_COLUMN: &str = "Price";

const PLAYER_ALIASES: &[&str] = &["player", "name", "jugador"];
const POSITION_ALIASES: &[&str] = &["position", "pos", "posición", "posicion"];
const TEAM_ALIASES: &[&str] = &["team", "club", "equipo"];
const PRICE_ALIASES: &[&str] = &["price", "cost", "value", "precio"];

#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Field delimiter; detected from the header line when unset.
    pub delimiter: Option<u8>,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndexes {
    player: usize,
    position: usize,
    team: usize,
    price: usize,
}

pub fn read_roster(path: &Path) -> Result<Vec<Player>, IngestError> {
    read_roster_with_options(path, &IngestOptions::default())
}

pub fn read_roster_with_options(
    path: &Path,
    options: &IngestOptions,
) -> Result<Vec<Player>, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    read_roster_from_str(&contents, &path.display().to_string(), options)
}

/// Parses roster CSV text; `origin` names the input in error messages.
pub fn read_roster_from_str(
    contents: &str,
    origin: &str,
    options: &IngestOptions,
) -> Result<Vec<Player>, IngestError> {
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| detect_delimiter(contents));
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());
    let csv_error = |source: csv::Error| IngestError::Csv {
        origin: origin.to_string(),
        source,
    };

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    debug!(origin, ?headers, "roster headers");
    let columns = resolve_columns(&headers, origin)?;

    let mut players = Vec::new();
    let mut seen = HashSet::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        if record.iter().all(|value| normalize_cell(value).is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(csv::Position::line)
            .unwrap_or(idx as u64 + 2);
        let player = parse_player(&record, columns, origin, line)?;
        if !seen.insert(player.name.clone()) {
            return Err(IngestError::DuplicatePlayer {
                origin: origin.to_string(),
                line,
                name: player.name,
            });
        }
        players.push(player);
    }

    if players.is_empty() {
        return Err(IngestError::EmptyRoster {
            origin: origin.to_string(),
        });
    }
    info!(origin, players = players.len(), "loaded roster");
    Ok(players)
}

fn parse_player(
    record: &StringRecord,
    columns: ColumnIndexes,
    origin: &str,
    line: u64,
) -> Result<Player, IngestError> {
    let invalid = |column: &'static str, value: &str, message: &str| IngestError::InvalidValue {
        origin: origin.to_string(),
        line,
        column,
        value: value.to_string(),
        message: message.to_string(),
    };
    let cell = |index: usize| normalize_cell(record.get(index).unwrap_or(""));

    let name = cell(columns.player);
    if name.is_empty() {
        return Err(invalid(PLAYER_COLUMN, &name, "player name is empty"));
    }
    let raw_position = cell(columns.position);
    let position = raw_position
        .parse::<Position>()
        .map_err(|error| invalid(POSITION_COLUMN, &raw_position, &error.to_string()))?;
    let team = cell(columns.team);
    if team.is_empty() {
        return Err(invalid(TEAM_COLUMN, &team, "team is empty"));
    }
    let raw_price = cell(columns.price);
    let price = parse_price(&raw_price)
        .ok_or_else(|| invalid(PRICE_COLUMN, &raw_price, "expected a non-negative number"))?;

    Ok(Player {
        name,
        position,
        team,
        price,
    })
}

fn resolve_columns(headers: &[String], origin: &str) -> Result<ColumnIndexes, IngestError> {
    let find = |column: &'static str, aliases: &[&str]| {
        headers
            .iter()
            .position(|header| {
                let lowered = header.to_lowercase();
                aliases.iter().any(|alias| *alias == lowered)
            })
            .ok_or_else(|| IngestError::MissingColumn {
                origin: origin.to_string(),
                column,
            })
    };
    Ok(ColumnIndexes {
        player: find(PLAYER_COLUMN, PLAYER_ALIASES)?,
        position: find(POSITION_COLUMN, POSITION_ALIASES)?,
        team: find(TEAM_COLUMN, TEAM_ALIASES)?,
        price: find(PRICE_COLUMN, PRICE_ALIASES)?,
    })
}

/// Parses a price, accepting a decimal comma (`12,5`).
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".").parse::<f64>().ok()?
    } else {
        trimmed.parse::<f64>().ok()?
    };
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn detect_delimiter(contents: &str) -> u8 {
    let header = contents
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
