//! Localization: embedded message catalogs, per-conversation language
//! preferences, and locale-aware date parsing.
//!
//! The preference map lives on the [`Localizer`] instance, so its lifetime is
//! scoped to the service that owns it.

use std::collections::HashMap;

use chrono::NaiveDate;
use parking_lot::RwLock;

use crate::errors::{AppError, AppResult};

const EN_US_CATALOG: &str = include_str!("../../resources/locales/en-US.json");
const RU_RU_CATALOG: &str = include_str!("../../resources/locales/ru-RU.json");

/// Supported conversation languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnUs,
    RuRu,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::RuRu => "ru-RU",
        }
    }

    /// Parse a locale tag or a common shorthand.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en-us" | "en" | "english" => Some(Locale::EnUs),
            "ru-ru" | "ru" | "russian" => Some(Locale::RuRu),
            _ => None,
        }
    }

    /// chrono format string of the locale's short date convention.
    pub fn date_format(&self) -> &'static str {
        match self {
            Locale::EnUs => "%m/%d/%Y",
            Locale::RuRu => "%d.%m.%Y",
        }
    }

    /// Human-readable rendering of [`Locale::date_format`], for prompts.
    pub fn date_pattern(&self) -> &'static str {
        match self {
            Locale::EnUs => "MM/DD/YYYY",
            Locale::RuRu => "DD.MM.YYYY",
        }
    }
}

/// Message catalogs plus per-conversation language preferences.
pub struct Localizer {
    default_locale: Locale,
    preferences: RwLock<HashMap<i64, Locale>>,
    catalogs: HashMap<Locale, HashMap<String, String>>,
}

impl Localizer {
    pub fn new(default_locale: Locale) -> AppResult<Self> {
        let mut catalogs = HashMap::new();
        catalogs.insert(Locale::EnUs, parse_catalog(EN_US_CATALOG)?);
        catalogs.insert(Locale::RuRu, parse_catalog(RU_RU_CATALOG)?);

        Ok(Self {
            default_locale,
            preferences: RwLock::new(HashMap::new()),
            catalogs,
        })
    }

    pub fn set_locale(&self, conversation: i64, locale: Locale) {
        self.preferences.write().insert(conversation, locale);
    }

    /// The conversation's preferred locale, or the default when none is set.
    pub fn locale_for(&self, conversation: i64) -> Locale {
        self.preferences
            .read()
            .get(&conversation)
            .copied()
            .unwrap_or(self.default_locale)
    }

    /// Localized text for `key`, falling back to the default locale's
    /// catalog when the preferred one misses the key.
    pub fn text(&self, key: &str, conversation: i64) -> AppResult<String> {
        let preferred = self.locale_for(conversation);

        self.lookup(preferred, key)
            .or_else(|| self.lookup(self.default_locale, key))
            .map(str::to_string)
            .ok_or_else(|| AppError::MissingKey(key.to_string()))
    }

    /// Localized text with `{0}`-style placeholders substituted.
    pub fn format(&self, key: &str, conversation: i64, args: &[&str]) -> AppResult<String> {
        Ok(fill(&self.text(key, conversation)?, args))
    }

    /// Parse `text` as a date under the conversation's locale conventions.
    /// ISO dates are accepted in every locale.
    pub fn try_parse_date(&self, text: &str, conversation: i64) -> Option<NaiveDate> {
        let text = text.trim();
        let locale = self.locale_for(conversation);

        NaiveDate::parse_from_str(text, locale.date_format())
            .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
            .ok()
    }

    /// Short date rendering under the conversation's locale conventions.
    pub fn short_date(&self, date: NaiveDate, conversation: i64) -> String {
        date.format(self.locale_for(conversation).date_format())
            .to_string()
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.catalogs
            .get(&locale)
            .and_then(|c| c.get(key))
            .map(String::as_str)
    }
}

fn parse_catalog(raw: &str) -> AppResult<HashMap<String, String>> {
    serde_json::from_str(raw).map_err(|e| AppError::Config(format!("locale catalog: {}", e)))
}

/// Substitute `{0}`, `{1}`, … placeholders.
fn fill(template: &str, args: &[&str]) -> String {
    let mut out = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        out = out.replace(&format!("{{{}}}", i), arg);
    }
    out
}
