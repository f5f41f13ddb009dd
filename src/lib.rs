//! DaoSpaces: a Zellij plugin for browsing and picking DAO spaces.
//!
//! The plugin shows a searchable, paginated list of DAOs read from a local
//! cache file. It runs in two modes:
//! - **browse**: `Enter` opens the DAO page in the browser
//! - **select**: `Enter` toggles a DAO and the action button (`Tab`) hands the
//!   choice back to whoever launched the picker through `zellij pipe`

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions                          │
//! │  - Selection bridge and action button               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - DAO cache   │   │ - Async load  │
//! │ - Theme/i18n  │   │   JSON file   │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │  ← Pure logic
//! │  - DAO model, filter, pagination, selection         │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/daospaces.wasm" {
//!         data_file "~/.cache/daospaces/daos.json"
//!         base_url "https://app.daospaces.io"
//!         mode "browse"
//!         theme "catppuccin-mocha"
//!         locale "en"
//!         refresh_interval "60"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Picking from a script
//!
//! ```sh
//! zellij pipe --plugin file:/path/to/daospaces.wasm --name pick -a search=alpha
//! ```
//!
//! The command blocks until a DAO is confirmed and prints it as JSON.
//!
//! # Example
//!
//! ```rust
//! use daospaces::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::KeyDown, Event::Activate] {
//!     let (_should_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! # Ok::<(), daospaces::DaoListError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, ListMode, SearchFocus};
pub use domain::{Dao, DaoListError, Result};
pub use ui::{Locale, Theme};

use app::{ListSettings, QueryState};
use std::collections::BTreeMap;

/// Default refetch period in seconds.
pub const DEFAULT_REFRESH_INTERVAL: f64 = 60.0;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// DAO cache file. Default: `daos.json` in the data directory.
    pub data_file: Option<String>,

    /// Web app root used to build DAO page URLs.
    pub base_url: String,

    /// Link opened by the "create new" row.
    pub support_url: String,

    /// Command used to open URLs. Default: `xdg-open`
    pub opener: String,

    /// Initial list mode; a pipe launch always selects.
    pub mode: ListMode,

    /// Initial search query.
    pub search: Option<String>,

    /// Built-in locale code: `en` or `ru`. Ignored if `locale_file` is set.
    pub locale: Option<String>,

    /// Path to a custom TOML locale file.
    pub locale_file: Option<String>,

    /// Built-in theme name: `catppuccin-mocha` or `catppuccin-latte`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// Panes narrower than this use the mobile layout and infinite scroll.
    pub mobile_breakpoint: usize,

    /// Seconds between cache refetches; `0` disables them.
    pub refresh_interval: f64,
}

impl Default for Config {
    fn default() -> Self {
        let settings = ListSettings::default();
        Self {
            data_file: None,
            base_url: settings.base_url,
            support_url: settings.support_url,
            opener: "xdg-open".to_string(),
            mode: ListMode::Browse,
            search: None,
            locale: None,
            locale_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            mobile_breakpoint: settings.mobile_breakpoint,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset; unparsable numbers fall back to their
    /// defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use daospaces::{Config, ListMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "select".to_string());
    /// map.insert("mobile_breakpoint".to_string(), "72".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.mode, ListMode::Select);
    /// assert_eq!(config.mobile_breakpoint, 72);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let mobile_breakpoint = get("mobile_breakpoint")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.mobile_breakpoint);

        let refresh_interval = get("refresh_interval")
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0)
            .unwrap_or(defaults.refresh_interval);

        Self {
            data_file: get("data_file"),
            base_url: get("base_url").unwrap_or(defaults.base_url),
            support_url: get("support_url").unwrap_or(defaults.support_url),
            opener: get("opener").unwrap_or(defaults.opener),
            mode: ListMode::from_config(get("mode").as_deref()),
            search: config.get("search").cloned().filter(|s| !s.is_empty()),
            locale: get("locale"),
            locale_file: get("locale_file"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            mobile_breakpoint,
            refresh_interval,
        }
    }

    fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }
        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }

    fn resolve_locale(&self) -> Locale {
        if let Some(locale_file) = &self.locale_file {
            return Locale::from_file(locale_file).unwrap_or_else(|e| {
                tracing::debug!(locale_file = %locale_file, error = %e, "failed to load locale from file, using default");
                Locale::default()
            });
        }
        self.locale.as_ref().map_or_else(Locale::default, |code| {
            Locale::from_code(code).unwrap_or_else(|| {
                tracing::debug!(locale = %code, "unknown locale, using default");
                Locale::default()
            })
        })
    }
}

/// Creates the initial `AppState` from configuration.
///
/// The state starts loading; the plugin posts the first `LoadDaos` right after.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing daospaces plugin");

    let settings = ListSettings {
        base_url: config.base_url.clone(),
        support_url: config.support_url.clone(),
        mobile_breakpoint: config.mobile_breakpoint,
        data_file: config.data_file.clone(),
    };
    let query = QueryState::new(config.search.clone().unwrap_or_default());

    let mut state = AppState::new(
        settings,
        config.mode,
        query,
        config.resolve_theme(),
        config.resolve_locale(),
    );
    state.apply_search_filter();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("data_file", "~/daos.json"),
            ("base_url", "https://spaces.example"),
            ("support_url", "https://help.example"),
            ("opener", "open"),
            ("mode", "select"),
            ("search", "alpha"),
            ("locale", "ru"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "debug"),
            ("mobile_breakpoint", "50"),
            ("refresh_interval", "15"),
        ]));

        assert_eq!(config.data_file.as_deref(), Some("~/daos.json"));
        assert_eq!(config.base_url, "https://spaces.example");
        assert_eq!(config.support_url, "https://help.example");
        assert_eq!(config.opener, "open");
        assert_eq!(config.mode, ListMode::Select);
        assert_eq!(config.search.as_deref(), Some("alpha"));
        assert_eq!(config.locale.as_deref(), Some("ru"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.mobile_breakpoint, 50);
        assert!((config.refresh_interval - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("mobile_breakpoint", "wide"),
            ("refresh_interval", "-5"),
        ]));
        assert_eq!(config.mobile_breakpoint, 60);
        assert!((config.refresh_interval - DEFAULT_REFRESH_INTERVAL).abs() < f64::EPSILON);
    }

    #[test]
    fn initialize_applies_mode_search_and_locale() {
        let config = Config {
            mode: ListMode::Select,
            search: Some("alp".to_string()),
            locale: Some("ru".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert!(state.is_loading);
        assert_eq!(state.list_mode, ListMode::Select);
        assert_eq!(state.query.search(), "alp");
        assert_eq!(state.locale.code(), "ru");
        assert!(state.button_label().is_some());
    }

    #[test]
    fn unknown_theme_and_locale_fall_back() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            locale: Some("xx".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);
        assert_eq!(state.locale.code(), "en");
    }
}
