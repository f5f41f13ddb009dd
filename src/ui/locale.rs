//! Localized UI strings.
//!
//! Locales are TOML tables of `key = "text"` pairs under `[strings]`. Built-in
//! locales are embedded at compile time; a custom file can be loaded instead.
//! Any key missing from the active locale falls back to English, and a key
//! missing from English renders as its own name.
//!
//! # TOML Format
//!
//! ```toml
//! code = "de"
//!
//! [strings]
//! title = "Räume"
//! proposals = "{count} Vorschläge"
//! ```
//!
//! Placeholders in braces are filled by [`Locale::format`].

use crate::domain::{DaoListError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const ENGLISH: &str = include_str!("../../locales/en.toml");

/// Keys of every string the list view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKey {
    Title,
    Loading,
    NoSpaces,
    NoSpacesHint,
    SearchLabel,
    LoadMore,
    CreateNewTitle,
    CreateNewSubtitle,
    SelectButton,
    SelectSpaceError,
    LoadFailed,
    Updated,
    JustNow,
    MinutesAgo,
    HoursAgo,
    DaysAgo,
    Proposals,
    FooterBrowse,
    FooterSelect,
    FooterTyping,
    FooterNavigating,
}

impl TextKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Loading => "loading",
            Self::NoSpaces => "no_spaces",
            Self::NoSpacesHint => "no_spaces_hint",
            Self::SearchLabel => "search_label",
            Self::LoadMore => "load_more",
            Self::CreateNewTitle => "create_new_title",
            Self::CreateNewSubtitle => "create_new_subtitle",
            Self::SelectButton => "select_button",
            Self::SelectSpaceError => "select_space_error",
            Self::LoadFailed => "load_failed",
            Self::Updated => "updated",
            Self::JustNow => "just_now",
            Self::MinutesAgo => "minutes_ago",
            Self::HoursAgo => "hours_ago",
            Self::DaysAgo => "days_ago",
            Self::Proposals => "proposals",
            Self::FooterBrowse => "footer_browse",
            Self::FooterSelect => "footer_select",
            Self::FooterTyping => "footer_typing",
            Self::FooterNavigating => "footer_navigating",
        }
    }
}

#[derive(Debug, Deserialize)]
struct LocaleFile {
    code: String,
    #[serde(default)]
    strings: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct Locale {
    code: String,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Locale {
    /// Loads a built-in locale by language code (`en`, `ru`).
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let source = match code.trim().to_ascii_lowercase().as_str() {
            "en" => ENGLISH,
            "ru" => include_str!("../../locales/ru.toml"),
            _ => return None,
        };
        Self::parse(source).ok()
    }

    /// Loads a locale from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DaoListError::Locale`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DaoListError::Locale(format!("failed to read locale file: {e}")))?;
        Self::parse(&contents)
    }

    fn parse(source: &str) -> Result<Self> {
        let file: LocaleFile = toml::from_str(source)
            .map_err(|e| DaoListError::Locale(format!("failed to parse locale TOML: {e}")))?;

        Ok(Self {
            code: file.code,
            strings: file.strings,
            fallback: Self::english_strings(),
        })
    }

    fn english_strings() -> HashMap<String, String> {
        toml::from_str::<LocaleFile>(ENGLISH)
            .map(|file| file.strings)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the text for `key` without placeholder substitution.
    #[must_use]
    pub fn text(&self, key: TextKey) -> &str {
        let name = key.as_str();
        self.strings
            .get(name)
            .or_else(|| self.fallback.get(name))
            .map_or(name, String::as_str)
    }

    /// Returns the text for `key` with each `{name}` replaced by its value.
    #[must_use]
    pub fn format(&self, key: TextKey, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.text(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::from_code("en").unwrap_or_else(|| Self {
            code: "en".to_string(),
            strings: HashMap::new(),
            fallback: HashMap::new(),
        })
    }
}
