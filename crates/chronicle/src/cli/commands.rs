//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chronicle - scheduled 90-day curriculum posting with human approval
#[derive(Parser, Debug)]
#[command(name = "chronicle")]
#[command(about = "Scheduled curriculum posting with human-in-the-loop approval", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute; omit for the interactive loop
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the configuration file
    #[arg(long, default_value = "chronicle.toml", global = true)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the daily schedule: one approval pass per day at the posting time
    Start,

    /// Generate and preview the next day's draft without posting
    Generate,

    /// Run one full pass: generate, approve, publish, record
    Post,

    /// Show journey progress
    Status,

    /// Show posting history
    History {
        /// Number of recent posts to show
        #[arg(long, default_value = "10")]
        count: usize,
    },

    /// Show the full curriculum with posted markers
    Curriculum,
}
