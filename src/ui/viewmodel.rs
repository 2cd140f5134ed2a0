//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! business logic, only display-ready strings and flags.
//!
//! # Example
//!
//! ```rust
//! use zticker::ui::viewmodel::{FooterInfo, HeaderInfo, PaginationInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Tickers (0) ".to_string(), status: "loading".to_string() },
//!     search_bar: None,
//!     columns: vec![],
//!     rows: vec![],
//!     pagination: PaginationInfo { pages: vec![] },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//! };
//! assert!(vm.rows.is_empty());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search box, shown while typing or while a query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// One header per sortable column, in column order.
    pub columns: Vec<ColumnHeader>,

    /// Rows of the current page.
    pub rows: Vec<DisplayRow>,

    /// One button per page.
    pub pagination: PaginationInfo,

    /// Keybinding hints.
    pub footer: FooterInfo,

    /// Message shown in place of the table when the current page is empty.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including the filtered count.
    pub title: String,

    /// Fetch status line (`loading`, record count and time, or failure).
    pub status: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether keystrokes currently edit the query.
    pub is_editing: bool,
}

/// A sortable column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    /// Column label, e.g. `Price (USD)`.
    pub label: &'static str,

    /// Key that sorts by this column.
    pub key: char,

    /// Direction arrow.
    ///
    /// Reflects the list-wide sort direction and is therefore identical on
    /// every column; only `is_active` tells which column is sorted.
    pub arrow: &'static str,

    /// Whether the list is currently sorted by this column.
    pub is_active: bool,
}

/// Price movement over the last 24 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Formatted cell text, one per column.
    pub cells: Vec<String>,

    /// Colour hint for the 24h change column.
    pub trend: Trend,

    /// Character range of the search match in the name cell, if any.
    pub name_highlight: Option<(usize, usize)>,
}

/// Pagination bar information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Buttons for pages `1..=page_count`.
    pub pages: Vec<PageButton>,
}

/// One page button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    /// One-based page number.
    pub number: usize,

    /// Whether this is the current page.
    pub is_active: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No tickers match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
