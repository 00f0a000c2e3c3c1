//! CLI command definitions

use clap::{Parser, ValueEnum};
use decksmith_domain::{BudgetTier, Game, PlayType, PowerTier};
use std::path::PathBuf;

/// Output format for finished decks
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full deck with sections, strategy, and completeness
    Full,
    /// One status line per section
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for decksmith
#[derive(Parser, Debug)]
#[command(name = "decksmith")]
#[command(author, version, about = "LLM-backed deck builder for trading card games")]
#[command(long_about = r#"
Decksmith builds a complete deck out of small generation calls.

The process has three phases:
1. Suggestions: one call proposes three deck concepts for your playstyle
2. Generation: every deck section is fetched concurrently and validated
   against its expected card count, with up to three attempts each
3. Assembly: sections merge into one deck as they resolve; a failed
   section can be re-fetched on its own without rebuilding the rest

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./decksmith.toml    Project-level config
3. ~/.config/decksmith/config.toml   Global config

Example:
  decksmith "graveyard value with big finishers"
  decksmith --game gundam "fast unit pressure"
  decksmith --leader "Krenko, Mob Boss" --budget budget --power focused
"#)]
pub struct Cli {
    /// Free-text description of how you like to play
    pub playstyle: Option<String>,

    /// Game to build for (mtg, gundam)
    #[arg(short, long, default_value = "mtg", value_name = "GAME")]
    pub game: Game,

    /// Commander or pilot you already have in mind
    #[arg(short, long, value_name = "NAME")]
    pub leader: Option<String>,

    /// Who the deck will be played against (friends, competitive, both)
    #[arg(long, default_value = "friends", value_name = "TYPE")]
    pub play_type: PlayType,

    /// Budget tier (budget, mid, high, no-limit)
    #[arg(short, long, default_value = "mid", value_name = "TIER")]
    pub budget: BudgetTier,

    /// Power tier (casual, focused, optimized, competitive)
    #[arg(short, long, default_value = "focused", value_name = "TIER")]
    pub power: PowerTier,

    /// Build suggestion N without the interactive picker
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=3))]
    pub pick: Option<u8>,

    /// Re-fetch failed sections without being asked
    #[arg(long)]
    pub retry_failed: bool,

    /// Print an importable deck list after the build
    #[arg(short, long)]
    pub export: bool,

    /// Output format (defaults to the config file's choice)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Forget the remembered unlock and exit
    #[arg(long)]
    pub logout: bool,
}
