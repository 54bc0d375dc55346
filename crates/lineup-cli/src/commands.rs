use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span};

use lineup_cli::config::load_config;
use lineup_cli::repl;
use lineup_cli::summary::{render_formations, render_roster, render_view};
use lineup_core::{LineupSession, RosterStore};
use lineup_ingest::{IngestOptions, read_roster_with_options};
use lineup_model::{
    FilterCriteria, FormationCatalog, LineupOptions, LineupView, Player, Position, SlotKey,
    TeamFilter,
};

use crate::cli::{BuildArgs, FilterArgs, OutputFormatArg, RosterArgs, RosterSource, SessionArgs};

pub fn run_formations(config: Option<&Path>) -> Result<()> {
    let (catalog, _) = load_settings(config)?;
    println!("{}", render_formations(&catalog));
    Ok(())
}

pub fn run_roster(args: &RosterArgs) -> Result<()> {
    let roster = load_roster(&args.source)?;
    let position = args
        .position
        .as_deref()
        .map(str::parse::<Position>)
        .transpose()
        .context("parse --position")?;
    let criteria = filter_criteria(&roster, &args.filter)?;
    let players: Vec<&Player> = roster
        .players()
        .iter()
        .filter(|player| position.is_none_or(|wanted| player.position == wanted))
        .filter(|player| criteria.matches(player))
        .collect();
    info!(shown = players.len(), total = roster.len(), "filtered roster");
    println!("{}", render_roster(&players));
    Ok(())
}

pub fn run_build(args: &BuildArgs, config: Option<&Path>) -> Result<LineupView> {
    let span = info_span!("build", roster = %args.source.roster.display());
    let _guard = span.enter();
    let (catalog, options) = load_settings(config)?;
    let roster = load_roster(&args.source)?;
    let criteria = filter_criteria(&roster, &args.filter)?;
    let mut session =
        LineupSession::new(roster, catalog, options).context("start lineup session")?;
    if let Some(name) = &args.formation {
        session
            .select_formation(name)
            .with_context(|| format!("select formation {name}"))?;
    }
    for raw in &args.picks {
        let (slot, player) = parse_pick(raw)?;
        session
            .assign(slot, &player)
            .with_context(|| format!("apply --pick {raw}"))?;
    }
    session
        .set_price_range(criteria.price_min, criteria.price_max)
        .context("apply price filter")?;
    let view = session
        .set_team_filter(criteria.team)
        .context("apply team filter")?;
    info!(
        formation = %view.formation,
        spent = view.budget.total_spent,
        remaining = view.budget.remaining,
        complete = view.is_complete,
        "lineup built"
    );
    Ok(view)
}

pub fn print_view(view: &LineupView, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print!("{}", render_view(view)),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(view).context("serialize lineup view")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_session(args: &SessionArgs, config: Option<&Path>) -> Result<()> {
    let (catalog, options) = load_settings(config)?;
    let roster = load_roster(&args.source)?;
    let mut session =
        LineupSession::new(roster, catalog, options).context("start lineup session")?;
    if let Some(name) = &args.formation {
        session
            .select_formation(name)
            .with_context(|| format!("select formation {name}"))?;
    }
    let stdin = io::stdin();
    let mut stdout = BufWriter::new(io::stdout().lock());
    repl::run_session(&mut session, stdin.lock(), &mut stdout).context("session i/o")?;
    Ok(())
}

fn load_settings(config: Option<&Path>) -> Result<(FormationCatalog, LineupOptions)> {
    let Some(path) = config else {
        return Ok((FormationCatalog::default(), LineupOptions::default()));
    };
    let config = load_config(path)?;
    let catalog = config
        .catalog()
        .with_context(|| format!("formations in {}", path.display()))?;
    let options = config
        .options()
        .with_context(|| format!("options in {}", path.display()))?;
    Ok((catalog, options))
}

fn load_roster(source: &RosterSource) -> Result<RosterStore> {
    let mut options = IngestOptions::new();
    if let Some(delimiter) = source.delimiter {
        let byte = u8::try_from(delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| anyhow!("delimiter must be a single ASCII character"))?;
        options = options.with_delimiter(byte);
    }
    let players = read_roster_with_options(&source.roster, &options).context("load roster")?;
    Ok(RosterStore::new(players))
}

/// Price bounds default to the roster's cheapest and most expensive player.
fn filter_criteria(roster: &RosterStore, args: &FilterArgs) -> Result<FilterCriteria> {
    let defaults = roster.default_filter();
    let mut criteria = FilterCriteria::new(
        args.min_price.unwrap_or(defaults.price_min),
        args.max_price.unwrap_or(defaults.price_max),
    )
    .context("price range")?;
    if let Some(team) = &args.team {
        criteria = criteria.with_team(TeamFilter::parse(team));
    }
    Ok(criteria)
}

fn parse_pick(raw: &str) -> Result<(SlotKey, String)> {
    let Some((slot, player)) = raw.split_once('=') else {
        bail!("--pick expects SLOT=PLAYER, got {raw:?}");
    };
    let slot = slot
        .trim()
        .parse::<SlotKey>()
        .with_context(|| format!("--pick {raw}"))?;
    let player = player.trim();
    if player.is_empty() {
        bail!("--pick {raw} names no player");
    }
    Ok((slot, player.to_string()))
}
