//! CLI argument definitions for the lineup planner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lineup",
    version,
    about = "Pick a football lineup from a priced roster within a budget",
    long_about = "Pick a football lineup from a priced roster within a budget.\n\n\
                  Loads a CSV roster (Player, Position, Team, Price), fills the slots of a\n\
                  formation and reports remaining budget, completeness and summary statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML file with budget, default formation and extra formations.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the available formations.
    Formations,

    /// Show the roster, optionally filtered.
    Roster(RosterArgs),

    /// Build a lineup from --pick arguments and print the result.
    Build(BuildArgs),

    /// Edit a lineup interactively, one command per line on stdin.
    Session(SessionArgs),
}

#[derive(Args)]
pub struct RosterSource {
    /// Roster CSV with Player, Position, Team and Price columns.
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Field delimiter (detected from the header when omitted).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Lowest price offered (default: cheapest roster player).
    #[arg(long = "min-price", value_name = "PRICE")]
    pub min_price: Option<f64>,

    /// Highest price offered (default: most expensive roster player).
    #[arg(long = "max-price", value_name = "PRICE")]
    pub max_price: Option<f64>,

    /// Offer only players from this team (`All` for every team).
    #[arg(long = "team", value_name = "TEAM")]
    pub team: Option<String>,
}

#[derive(Parser)]
pub struct RosterArgs {
    #[command(flatten)]
    pub source: RosterSource,

    /// Only show one position (GOALKEEPER, DEFENSE, MIDFIELD, FORWARD or an alias).
    #[arg(long = "position", value_name = "POSITION")]
    pub position: Option<String>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Parser)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: RosterSource,

    /// Formation name (default: first catalog entry).
    #[arg(long = "formation", value_name = "NAME")]
    pub formation: Option<String>,

    /// Slot assignment, repeatable, e.g. --pick "FORWARD_1=Fwd A".
    #[arg(long = "pick", value_name = "SLOT=PLAYER")]
    pub picks: Vec<String>,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output format for the derived lineup.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct SessionArgs {
    #[command(flatten)]
    pub source: RosterSource,

    /// Formation to start with (default: first catalog entry).
    #[arg(long = "formation", value_name = "NAME")]
    pub formation: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
