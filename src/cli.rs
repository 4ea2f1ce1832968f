//! Command-line interface definition for Classcord
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for running a notification pass and resetting
//! the persisted watermark history.

use clap::{Parser, Subcommand};

/// Classcord - Google Classroom to Discord notification bridge
///
/// Polls Google Classroom for new announcements and coursework and
/// relays them to a Discord webhook, remembering what has already
/// been delivered between runs.
#[derive(Parser, Debug, Clone)]
#[command(name = "classcord")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the watermark database path
    #[arg(long, env = "CLASSCORD_STATE_DB")]
    pub state_path: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Classcord
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one poll-and-notify pass over all visible courses
    Run {
        /// Fetch and detect new items but do not send anything to the webhook
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete all persisted watermarks so the next run re-notifies everything
    Reset,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
