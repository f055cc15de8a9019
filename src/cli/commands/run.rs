//! The `run` subcommand: wire configuration, schedule store, localization,
//! and the console transport into a dispatcher, then drain the event stream.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::bot::Dispatcher;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::i18n::Localizer;
use crate::schedule::ScheduleStore;
use crate::transport::console::ConsoleTransport;

/// Handle the `run` command
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::load(cli.config.as_ref())?;

    if let Some(schedule) = &cli.schedule {
        cfg.schedule_file = schedule.to_string_lossy().to_string();
    }

    let store = Arc::new(ScheduleStore::open(PathBuf::from(&cfg.schedule_file).as_path())?);
    let localizer = Arc::new(Localizer::new(cfg.locale()?)?);

    // The local session authenticates as the OS user.
    let sender = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "local".to_string());
    let transport = Arc::new(ConsoleTransport::new(&sender));

    let mut dispatcher = Dispatcher::new(
        &cfg.subject_name,
        cfg.admins.clone(),
        cfg.whitelist.clone(),
        PathBuf::from(&cfg.upload_dir),
        store,
        localizer,
        transport.clone(),
    );

    info!("bot ready as {} (Ctrl+D to stop)", sender);

    // Single logical event stream: one event at a time until EOF.
    while let Some(event) = transport.next_event()? {
        if let Err(e) = dispatcher.dispatch(event) {
            tracing::error!("dispatch failed: {}", e);
        }
    }

    info!("event stream closed, shutting down");
    Ok(())
}
