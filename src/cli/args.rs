//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterkit seed --roster <id> [--data <dir>]
//! - rosterkit show --roster <id> [--data <dir>]
//! - rosterkit validate --roster <id> [--data <dir>]
//! - rosterkit export --roster <id> [--data <dir>] [--out <path>]
//! - rosterkit clear --roster <id> [--data <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterkit - a strict, deterministic roster validation and CSV export engine
#[derive(Parser, Debug)]
#[command(name = "rosterkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed a roster with its default records
    Seed {
        /// Roster id (talent | athlete)
        #[arg(long)]
        roster: String,

        /// Data directory
        #[arg(long, default_value = "./roster-data")]
        data: PathBuf,
    },

    /// Print the stored records as JSON
    Show {
        /// Roster id (talent | athlete)
        #[arg(long)]
        roster: String,

        /// Data directory
        #[arg(long, default_value = "./roster-data")]
        data: PathBuf,
    },

    /// Validate the stored roster and print the report
    Validate {
        /// Roster id (talent | athlete)
        #[arg(long)]
        roster: String,

        /// Data directory
        #[arg(long, default_value = "./roster-data")]
        data: PathBuf,
    },

    /// Export the stored roster as CSV
    Export {
        /// Roster id (talent | athlete)
        #[arg(long)]
        roster: String,

        /// Data directory
        #[arg(long, default_value = "./roster-data")]
        data: PathBuf,

        /// Output path (defaults to the dated filename in the working dir)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Remove the stored roster
    Clear {
        /// Roster id (talent | athlete)
        #[arg(long)]
        roster: String,

        /// Data directory
        #[arg(long, default_value = "./roster-data")]
        data: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
