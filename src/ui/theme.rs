//! Color palettes and the ANSI escapes built from them.
//!
//! A palette is a TOML document with a `name` and a `[colors]` table of hex
//! strings. Four Catppuccin flavours (`catppuccin-mocha`, the default, plus
//! `-latte`, `-frappe` and `-macchiato`) are compiled in from `themes/`; any
//! other palette is read from the file named by the `theme_file` option and
//! must define the same keys.

use crate::domain::error::{Result, TickerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Palettes shipped inside the plugin binary.
const BUILTIN_THEMES: [(&str, &str); 4] = [
    ("catppuccin-mocha", include_str!("../../themes/catppuccin-mocha.toml")),
    ("catppuccin-latte", include_str!("../../themes/catppuccin-latte.toml")),
    ("catppuccin-frappe", include_str!("../../themes/catppuccin-frappe.toml")),
    ("catppuccin-macchiato", include_str!("../../themes/catppuccin-macchiato.toml")),
];

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for each screen element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text and column labels.
    pub header_fg: String,
    /// Title bar fill; the terminal background when absent.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Current page button and sorted column label.
    pub selection_fg: String,
    pub selection_bg: String,

    /// Table cells and search input.
    pub text_normal: String,
    /// Status line, footer hints and inactive page buttons.
    pub text_dim: String,

    /// Horizontal rules.
    pub border: String,

    /// Frame around the search input.
    pub search_bar_border: String,
    /// Matched part of a ticker name.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Headline of the empty-table message.
    pub empty_state_fg: String,

    /// Sort direction arrows.
    pub sort_indicator_fg: String,

    /// 24h change above zero.
    pub positive_fg: String,
    /// 24h change below zero.
    pub negative_fg: String,
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTIN_THEMES.iter().map(|(name, _)| *name)
    }

    /// Looks up a compiled-in palette; `None` for unknown names.
    ///
    /// ```rust
    /// use zticker::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::from_name("catppuccin-latte").map(|t| t.name).as_deref(), Some("catppuccin-latte"));
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_THEMES
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .and_then(|(_, source)| toml::from_str(source).ok())
    }

    /// Reads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// [`TickerError::Io`] when the file cannot be read,
    /// [`TickerError::Theme`] when it is not a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        toml::from_str(&source).map_err(|e| TickerError::Theme(format!("invalid theme file: {e}")))
    }

    /// `#rrggbb` (leading `#` optional) to channels; malformed input is white.
    fn rgb(hex: &str) -> (u8, u8, u8) {
        let digits = hex.trim().trim_start_matches('#');
        let value = if digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            u32::from_str_radix(digits, 16).ok()
        } else {
            None
        };

        value.map_or((255, 255, 255), |v| {
            let [_, r, g, b] = v.to_be_bytes();
            (r, g, b)
        })
    }

    /// Truecolor foreground escape.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[38;2;{r};{g};{b}m")
    }

    /// Truecolor background escape.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb(hex);
        format!("\u{1b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{1b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{1b}[2m"
    }

    /// Resets every SGR attribute.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{1b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Never in practice: `builtin_themes_parse` checks every embedded palette.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").expect("embedded catppuccin-mocha palette is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in Theme::builtin_names() {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn hex_colors_become_truecolor_escapes() {
        assert_eq!(Theme::fg("#a6e3a1"), "\u{1b}[38;2;166;227;161m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
    }

    #[test]
    fn malformed_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zzzzzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#+12345"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn loads_custom_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.positive_fg = "#00ff00".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();

        assert_eq!(loaded, theme);
    }

    #[test]
    fn invalid_theme_file_is_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();

        assert!(matches!(err, TickerError::Theme(_)));
    }

    #[test]
    fn missing_theme_file_is_io_error() {
        let err = Theme::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, TickerError::Io(_)));
    }
}
