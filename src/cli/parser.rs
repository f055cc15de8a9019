use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for shiftbot
#[derive(Parser)]
#[command(
    name = "shiftbot",
    version = env!("CARGO_PKG_VERSION"),
    about = "A conversational bot that answers work-shift questions from a weekly schedule spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Override the schedule file path from the configuration
    #[arg(global = true, long = "schedule")]
    pub schedule: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file to edit
    Init,

    /// Load the schedule and start the bot on the console transport
    Run,
}
