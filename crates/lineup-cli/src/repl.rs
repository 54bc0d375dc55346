//! Line-oriented interactive session over stdin.
//!
//! Each input line is one [`SessionCommand`]. Mutations re-render the
//! lineup; rejected input prints an error and the loop keeps going.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, warn};

use lineup_core::{LineupSession, SessionStore};
use lineup_model::{LineupError, SlotKey, TeamFilter};

use crate::summary::{render_formations, render_view, status_label};

pub const HELP: &str = "\
Commands:
  formation <name>        switch formation (picks outside it are set aside)
  price <min> <max>       offer only players priced within [min, max]
  team <name|All>         offer only players from one team
  pick <SLOT> <player>    put a player in a slot, e.g. pick DEFENSE_2 Def B
  clear <SLOT>            empty a slot
  options <SLOT>          list the players offered for a slot
  show                    render the lineup again
  formations              list available formations
  teams                   list roster teams
  help                    this text
  quit                    leave the session";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Formation(String),
    Price { min: f64, max: f64 },
    Team(TeamFilter),
    Pick { slot: SlotKey, player: String },
    Clear(SlotKey),
    Options(SlotKey),
    Show,
    Formations,
    Teams,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help` for the command list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error(transparent)]
    Lineup(#[from] LineupError),
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_ascii_lowercase().as_str() {
            "formation" | "f" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("formation <name>"));
                }
                Ok(SessionCommand::Formation(rest.to_string()))
            }
            "price" => {
                let mut bounds = rest.split_whitespace();
                let (Some(min), Some(max), None) = (bounds.next(), bounds.next(), bounds.next())
                else {
                    return Err(CommandError::Usage("price <min> <max>"));
                };
                Ok(SessionCommand::Price {
                    min: parse_number(min)?,
                    max: parse_number(max)?,
                })
            }
            "team" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("team <name|All>"));
                }
                Ok(SessionCommand::Team(TeamFilter::parse(rest)))
            }
            "pick" | "p" => {
                let Some((slot, player)) = rest.split_once(char::is_whitespace) else {
                    return Err(CommandError::Usage("pick <SLOT> <player>"));
                };
                Ok(SessionCommand::Pick {
                    slot: slot.parse()?,
                    player: player.trim().to_string(),
                })
            }
            "clear" => Ok(SessionCommand::Clear(parse_slot(rest, "clear <SLOT>")?)),
            "options" | "o" => Ok(SessionCommand::Options(parse_slot(rest, "options <SLOT>")?)),
            "show" | "s" => Ok(SessionCommand::Show),
            "formations" => Ok(SessionCommand::Formations),
            "teams" => Ok(SessionCommand::Teams),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

fn parse_slot(raw: &str, usage: &'static str) -> Result<SlotKey, CommandError> {
    if raw.is_empty() || raw.contains(char::is_whitespace) {
        return Err(CommandError::Usage(usage));
    }
    Ok(raw.parse()?)
}

/// Accepts a decimal comma like the roster parser does.
fn parse_number(raw: &str) -> Result<f64, CommandError> {
    raw.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidNumber(raw.to_string()))
}

/// Applies one command and returns the text to print.
///
/// Returns `None` for [`SessionCommand::Quit`].
pub fn apply_command<S: SessionStore>(
    session: &mut LineupSession<S>,
    command: SessionCommand,
) -> Result<Option<String>, CommandError> {
    let view = match command {
        SessionCommand::Quit => return Ok(None),
        SessionCommand::Help => return Ok(Some(HELP.to_string())),
        SessionCommand::Formations => return Ok(Some(render_formations(session.catalog()))),
        SessionCommand::Teams => {
            let mut teams = vec!["All".to_string()];
            teams.extend(session.roster().teams().into_iter().map(str::to_string));
            return Ok(Some(teams.join("\n")));
        }
        SessionCommand::Options(slot) => {
            let options = session.options(slot)?;
            if options.is_empty() {
                return Ok(Some(format!("{slot}: no players offered")));
            }
            return Ok(Some(format!("{slot}:\n  {}", options.join("\n  "))));
        }
        SessionCommand::Show => session.view()?,
        SessionCommand::Formation(name) => session.select_formation(&name)?,
        SessionCommand::Price { min, max } => session.set_price_range(min, max)?,
        SessionCommand::Team(team) => session.set_team_filter(team)?,
        SessionCommand::Pick { slot, player } => session.assign(slot, &player)?,
        SessionCommand::Clear(slot) => session.clear(slot)?,
    };
    debug!(status = status_label(view.status), "rendered view");
    Ok(Some(render_view(&view)))
}

/// Runs the session until `quit` or end of input.
pub fn run_session<S, R, W>(
    session: &mut LineupSession<S>,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: SessionStore,
    R: BufRead,
    W: Write,
{
    match session.view() {
        Ok(view) => writeln!(output, "{}", render_view(&view))?,
        Err(error) => writeln!(output, "error: {error}")?,
    }
    writeln!(output, "Type `help` for commands.")?;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let outcome = trimmed
            .parse::<SessionCommand>()
            .and_then(|command| apply_command(session, command));
        match outcome {
            Ok(Some(text)) => writeln!(output, "{text}")?,
            Ok(None) => break,
            Err(error) => {
                warn!(input = trimmed, %error, "session command rejected");
                writeln!(output, "error: {error}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
