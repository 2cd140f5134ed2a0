//! Input mode state for the application.
//!
//! The plugin is either in **Normal** mode, where single keys sort columns and
//! move between pages, or in **Search** mode, where typed characters edit the
//! search query.
//!
//! # Example
//!
//! ```rust
//! use zticker::app::modes::InputMode;
//!
//! let mode = InputMode::Search;
//! assert!(mode.is_search());
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the search bar shows an
/// editing cursor. Determines the displayed footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation and sorting.
    ///
    /// Available keybindings: 1-7 (sort), h/l (page), g/G (first/last page),
    /// / (search), q (quit).
    #[default]
    Normal,

    /// Typing into the search box.
    ///
    /// Characters edit the query, Enter keeps it, Esc clears it.
    Search,
}

impl InputMode {
    /// Whether keystrokes currently go to the search box.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search)
    }
}
