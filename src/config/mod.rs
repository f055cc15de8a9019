use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::i18n::Locale;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Name of the person whose schedule the bot reports.
    pub subject_name: String,
    /// Path of the active schedule spreadsheet.
    pub schedule_file: String,
    /// Directory where uploaded schedule files are saved.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Senders allowed to run control commands.
    pub admins: Vec<String>,
    /// Senders allowed to talk to the bot at all (admins are implied).
    pub whitelist: Vec<String>,
    /// Locale tag used when a conversation has no preference set.
    #[serde(default = "default_locale_tag")]
    pub default_locale: String,
}

fn default_upload_dir() -> String {
    Config::config_dir()
        .join("uploads")
        .to_string_lossy()
        .to_string()
}

fn default_locale_tag() -> String {
    "en-US".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subject_name: "Subject".to_string(),
            schedule_file: Config::config_dir()
                .join("schedule.xlsx")
                .to_string_lossy()
                .to_string(),
            upload_dir: default_upload_dir(),
            admins: Vec::new(),
            whitelist: Vec::new(),
            default_locale: default_locale_tag(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shiftbot")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftbot.conf")
    }

    /// Load configuration from `path`, or from the standard location.
    pub fn load(path: Option<&PathBuf>) -> AppResult<Self> {
        let path = path.cloned().unwrap_or_else(Self::config_file);

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
    }

    /// The configured default locale, validated.
    pub fn locale(&self) -> AppResult<Locale> {
        Locale::from_tag(&self.default_locale)
            .ok_or_else(|| AppError::InvalidLocale(self.default_locale.clone()))
    }

    /// Write a default configuration file (and the upload directory) at the
    /// standard location, for the operator to edit.
    pub fn init_all(path: Option<&PathBuf>) -> AppResult<PathBuf> {
        let path = path.cloned().unwrap_or_else(Self::config_file);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        fs::create_dir_all(&config.upload_dir)?;

        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(path)
    }
}
