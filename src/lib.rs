//! zticker: a Zellij plugin for browsing cryptocurrency tickers.
//!
//! zticker fetches the Coinlore ticker list once and provides:
//! - Case-insensitive substring search over ticker names and IDs
//! - Sorting by any of seven columns with ascending/descending toggling
//! - Fixed-size pagination with one button per page
//! - Theme support with built-in Catppuccin palettes

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! Data moves in one direction; only `main.rs` talks to the host.
//!
//! ```text
//!  host event ──► main.rs ──► app::Event ──► app::handle_event ──► app::Action ──► main.rs ──► host call
//!                                                  │
//!                       source::DataSource ◄───────┤ decode response
//!                                                  ▼
//!                                      app::AppState { list: ListViewModel, .. }
//!                                                  │ compute_viewmodel
//!                                                  ▼
//!                                ui::UIViewModel ──► ui::render ──► ANSI
//! ```
//!
//! Supporting modules: [`domain`] (ticker record, sort fields, errors),
//! [`infrastructure`] (sandbox paths) and [`observability`] (OTLP file
//! tracing).
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zticker.wasm" {
//!         endpoint "https://api.coinlore.net/api/tickers/"
//!         page_size "20"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse [`Config`], start tracing, build
//!    [`AppState`] via [`initialize`], request web access and subscribe to
//!    key and web events.
//! 2. **Permission Granted**: the handler emits [`Action::FetchTickers`];
//!    the shim issues the GET through the host.
//! 3. **Response**: the body is decoded by the [`source::DataSource`] and
//!    loaded into the list, or the failure is logged and shown.
//! 4. **Interaction**: keys become [`Event`]s, [`handle_event`] mutates the
//!    view state and the UI re-renders from a fresh view model.
//!
//! # Example
//!
//! ```rust
//! use zticker::{handle_event, initialize, Config, Event, SortField};
//!
//! let mut state = initialize(&Config::default());
//!
//! let body = br#"{"data":[
//!     {"id":"90","symbol":"BTC","name":"Bitcoin","rank":1},
//!     {"id":"80","symbol":"ETH","name":"Ethereum","rank":2}
//! ]}"#;
//! handle_event(&mut state, &Event::TickersFetched { status: 200, body: body.to_vec() })?;
//! handle_event(&mut state, &Event::SortBy(SortField::Rank))?;
//! handle_event(&mut state, &Event::SortBy(SortField::Rank))?;
//!
//! let names: Vec<_> = state.list.compute_view().iter().map(|t| t.name.as_str()).collect();
//! assert_eq!(names, ["Ethereum", "Bitcoin"]);
//! # Ok::<(), zticker::TickerError>(())
//! ```
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Terminal**: Any ANSI-capable terminal emulator with truecolor

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{Result, SortField, Ticker, TickerError};
pub use ui::Theme;

use app::list::DEFAULT_ITEMS_PER_PAGE;
use source::{CoinloreSource, DEFAULT_ENDPOINT};
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Plugin configuration parsed from the Zellij KDL plugin block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Ticker API URL. Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Records per page. Default: 10
    pub page_size: NonZeroUsize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file, `~` already expanded.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_ITEMS_PER_PAGE,
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Blank values and an invalid `page_size`
    /// fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zticker::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("theme_file".to_string(), "~/themes/zt.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.page_size.get(), 25);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/themes/zt.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let page_size = value("page_size").map_or(defaults.page_size, |raw| {
            parse_page_size(&raw).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid page_size, using default");
                defaults.page_size
            })
        });

        Self {
            endpoint: value("endpoint").unwrap_or(defaults.endpoint),
            page_size,
            theme_name: value("theme"),
            theme_file: value("theme_file").map(|path| infrastructure::expand_tilde(&path)),
            trace_level: value("trace_level").unwrap_or(defaults.trace_level),
        }
    }
}

/// Parses a strictly positive page size.
///
/// # Errors
///
/// Returns [`TickerError::Config`] for anything but a positive integer.
pub fn parse_page_size(raw: &str) -> Result<NonZeroUsize> {
    raw.parse::<NonZeroUsize>()
        .map_err(|e| TickerError::Config(format!("page_size {raw:?}: {e}")))
}

/// Builds the initial application state from configuration.
///
/// The theme is resolved in order: `theme_file`, then `theme_name`, then
/// the default palette; any failure falls back with a debug log. The record
/// set starts empty until the fetch completes.
///
/// # Example
///
/// ```rust
/// use zticker::source::DataSource;
/// use zticker::{initialize, Config};
///
/// let state = initialize(&Config::default());
/// assert!(state.list.is_empty());
/// assert_eq!(state.source.endpoint(), "https://api.coinlore.net/api/tickers/");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, page_size = config.page_size.get(), "initializing zticker plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(
        Box::new(CoinloreSource::new(config.endpoint.clone())),
        config.page_size,
        theme,
    )
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
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn reads_every_key() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/tickers"),
            ("page_size", "50"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "/etc/zt.toml"),
            ("trace_level", "zticker=trace"),
        ]));

        assert_eq!(config.endpoint, "http://localhost:8080/tickers");
        assert_eq!(config.page_size.get(), 50);
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("/etc/zt.toml"));
        assert_eq!(config.trace_level, "zticker=trace");
    }

    #[test]
    fn invalid_page_size_falls_back() {
        for raw in ["0", "-3", "ten", "1.5"] {
            let config = Config::from_zellij(&map(&[("page_size", raw)]));
            assert_eq!(config.page_size, DEFAULT_ITEMS_PER_PAGE, "page_size {raw}");
        }
    }

    #[test]
    fn page_size_error_is_config_error() {
        assert!(matches!(parse_page_size("0"), Err(TickerError::Config(_))));
        assert_eq!(parse_page_size(" 7".trim()).unwrap().get(), 7);
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = Config::from_zellij(&map(&[("endpoint", "  "), ("theme", "")]));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn initialize_applies_page_size_and_theme() {
        let config = Config {
            page_size: NonZeroUsize::new(3).unwrap(),
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };

        let state = initialize(&config);

        assert_eq!(state.list.view_state().items_per_page.get(), 3);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/no/such/theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };

        assert_eq!(initialize(&config).theme, Theme::default());
    }
}
