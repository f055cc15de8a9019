//! Unified application error type.
//! All modules (schedule, bot, i18n, config, transport) return AppError to
//! keep the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Spreadsheet-related
    // ---------------------------
    #[error("Schedule file could not be decoded: {0}")]
    Decode(String),

    #[error("Schedule layout error: {0}")]
    Layout(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid locale tag: {0}")]
    InvalidLocale(String),

    // ---------------------------
    // Bot protocol errors
    // ---------------------------
    #[error("Query shape not supported by this command: {0}")]
    UnsupportedQuery(&'static str),

    #[error("No localized text for key '{0}'")]
    MissingKey(String),

    // ---------------------------
    // Transport errors
    // ---------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
