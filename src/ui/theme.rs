//! Theme management and ANSI escape sequence generation.
//!
//! Built-in themes ship inside the binary as TOML; custom themes are loaded from a
//! TOML file with the same shape. Colors are hex strings turned into 24-bit ANSI
//! escapes on demand.
//!
//! # Built-in Themes
//!
//! - `sippi-dark`: violet-on-ink dark theme (default)
//! - `sippi-light`: the same palette on a paper background
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e6e1f4"
//! header_bg = "#2a2340"          # optional
//! selection_fg = "#1b1726"
//! selection_bg = "#b79cff"
//! text_normal = "#e6e1f4"
//! text_dim = "#8a83a3"
//! border = "#3d3558"
//! accent = "#7fd8be"
//! search_bar_border = "#b79cff"
//! match_highlight_fg = "#1b1726"
//! match_highlight_bg = "#ffd479"
//! empty_state_fg = "#7fb6ff"
//! error_fg = "#1b1726"
//! error_bg = "#ff7a8a"
//! overlay_bg = "#221d33"
//! overlay_border = "#7fd8be"
//! ```
//!
//! # Example
//!
//! ```rust
//! use podshelf::ui::theme::Theme;
//!
//! let theme = Theme::from_name("sippi-light").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.starts_with("\u{1b}[1m"));
//! assert_eq!(theme.name, "sippi-light");
//! ```

use crate::domain::error::{PodshelfError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when nothing is configured.
pub const DEFAULT_THEME: &str = "sippi-dark";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#e6e1f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, column captions, secondary info.
    pub text_dim: String,

    /// Separator lines.
    pub border: String,

    /// Genre and sort labels in the controls bar, the current page marker.
    pub accent: String,

    pub search_bar_border: String,
    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Supply failure banner.
    pub error_fg: String,
    pub error_bg: String,

    /// Detail overlay.
    pub overlay_bg: String,
    pub overlay_border: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "sippi-dark" => include_str!("../../themes/sippi-dark.toml"),
            "sippi-light" => include_str!("../../themes/sippi-light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PodshelfError::Theme`] if the file cannot be read or its TOML
    /// content is invalid (syntax, missing fields, type mismatches).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PodshelfError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| PodshelfError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple; malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
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

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (`sippi-dark`).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in sippi-dark theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "sippi-dark");
        assert!(Theme::from_name("sippi-light").is_some());
        assert!(Theme::from_name("catppuccin-mocha").is_none());
    }

    #[test]
    fn hex_becomes_truecolor_escape() {
        assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#zz"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_round_trip() {
        let original = Theme::from_name("sippi-dark").unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&original).unwrap().as_bytes())
            .unwrap();
        assert_eq!(Theme::from_file(file.path()).unwrap(), original);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = 3").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(PodshelfError::Theme(_))));
    }
}
