//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use eventline_core::{EventStatus, OutputFormat, RangeFilter};

/// eventline - Community event timeline and announcement parser
#[derive(Debug, Parser)]
#[command(name = "eventline")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "EVENTLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to the events file (overrides the configured store)
    #[arg(long, env = "EVENTLINE_EVENTS")]
    pub events: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Returns the output format based on CLI flags.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Tty
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a pasted announcement into an event
    Parse(ParseArgs),

    /// Show the day-by-day timeline
    Timeline {
        /// Which days to show (month, next, all)
        #[arg(long, short)]
        range: Option<RangeFilter>,
    },

    /// List stored events
    List,

    /// Show a stored event
    Show {
        /// Event id
        id: String,

        /// Open the event's Discord link in the browser
        #[arg(long)]
        open: bool,
    },

    /// Change the status of a stored event
    Status {
        /// Event id
        id: String,

        /// New status (planned, confirmed, completed, cancelled)
        status: EventStatus,
    },

    /// Remove a stored event
    Remove {
        /// Event id
        id: String,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for `eventline parse`.
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File containing the announcement (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Poster image URL
    #[arg(long)]
    pub poster_url: Option<String>,

    /// Link to the Discord announcement
    #[arg(long)]
    pub discord_url: Option<String>,

    /// Event date (YYYY-MM-DD), replaces any date found in the text
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Copy the JSON record to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Validate the event and add it to the store
    #[arg(long)]
    pub save: bool,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}
