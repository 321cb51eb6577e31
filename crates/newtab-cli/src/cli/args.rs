use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use newtab_core::models::SizeClass;

#[derive(Debug, Parser)]
#[command(name = "newtab")]
#[command(about = "Inspect and drive New Tab Page state")]
pub struct Cli {
    /// Directory holding newtab_preferences.json and favorites.json
    /// (defaults to $NEWTAB_BASE_DIR, then the platform data dir)
    #[arg(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Onboarding intro message
    #[command(subcommand)]
    Intro(IntroCommand),

    /// Favorites grid
    #[command(subcommand)]
    Favorites(FavoritesCommand),
}

#[derive(Debug, Subcommand)]
pub enum IntroCommand {
    /// Show whether the intro message would be visible
    Status,

    /// Record impressions on a single page
    Displayed {
        /// Number of impressions to record
        #[arg(long, short = 'n', default_value_t = 1)]
        times: u32,
    },

    /// Dismiss the intro message
    Dismiss,

    /// Enable the intro message (onboarding decided to show it)
    Enable,

    /// Record a "customize" tap
    Customize,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// List favorites as the grid would show them
    List {
        #[arg(long, value_enum, default_value_t = SizeClassArg::Compact)]
        size_class: SizeClassArg,
        #[arg(long)]
        landscape: bool,
    },

    /// Append a favorite
    Add { title: String, url: String },

    /// Move a favorite (0-based indices)
    Move { from: usize, to: usize },

    /// Delete the favorite at an index
    Delete { index: usize },

    /// Open the favorite at an index
    Select { index: usize },

    /// Request editing the favorite at an index
    Edit { index: usize },

    /// Collapse or expand the favorites section
    ToggleCollapse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SizeClassArg {
    Compact,
    Regular,
}

impl From<SizeClassArg> for SizeClass {
    fn from(arg: SizeClassArg) -> Self {
        match arg {
            SizeClassArg::Compact => SizeClass::Compact,
            SizeClassArg::Regular => SizeClass::Regular,
        }
    }
}
