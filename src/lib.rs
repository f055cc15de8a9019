//! shiftbot library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod bot;
pub mod cli;
pub mod config;
pub mod errors;
pub mod i18n;
pub mod schedule;
pub mod transport;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Run => cli::commands::run::handle(cli),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    dispatch(&cli)
}
