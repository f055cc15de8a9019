use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// Writes a default configuration file (and creates the upload directory)
/// for the operator to fill in: subject name, schedule file path, admin and
/// whitelist handles.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_ref())?;

    println!("Config file written to {}", path.display());
    println!("Edit it before running `shiftbot run`.");

    Ok(())
}
