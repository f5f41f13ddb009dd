//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML color tables. Two Catppuccin variants are built in and a
//! custom file can be loaded instead.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! cursor_fg = "#1e1e2e"
//! cursor_bg = "#cba6f7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#cba6f7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! chosen_fg = "#a6e3a1"
//! affordance_fg = "#89dceb"
//! button_fg = "#1e1e2e"
//! button_bg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::{DaoListError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Colors of every UI element, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Row under the keyboard cursor.
    pub cursor_fg: String,
    pub cursor_bg: String,

    pub text_normal: String,
    /// Footer, addresses and other secondary text.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Search match inside a DAO name.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Marker of the DAO chosen in selection mode.
    pub chosen_fg: String,

    /// "Load more" and "create new" rows.
    pub affordance_fg: String,

    /// The host action button in the footer.
    pub button_fg: String,
    pub button_bg: String,

    /// Error toasts.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DaoListError::Theme`] if the file cannot be read or does not
    /// describe every required color.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DaoListError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| DaoListError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Plain white-on-default palette used if the embedded theme cannot load.
    fn monochrome() -> Self {
        let white = || "#ffffff".to_string();
        let grey = || "#808080".to_string();
        let black = || "#000000".to_string();
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors {
                header_fg: white(),
                header_bg: None,
                cursor_fg: black(),
                cursor_bg: white(),
                text_normal: white(),
                text_dim: grey(),
                border: grey(),
                search_bar_border: white(),
                match_highlight_fg: black(),
                match_highlight_bg: grey(),
                empty_state_fg: white(),
                chosen_fg: white(),
                affordance_fg: white(),
                button_fg: black(),
                button_bg: white(),
                error_fg: white(),
            },
        }
    }

    /// Converts a hex color to an RGB tuple, white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(latte.colors.header_bg.as_deref(), Some("#e6e9ef"));
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_escape_sequences() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nope"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(DaoListError::Theme(_))));
    }
}
