//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin.
//! It pairs the ticker [`ListViewModel`] with everything the list itself does
//! not care about: the input mode, the fetch status, the data source and the
//! theme.
//!
//! # View Model Computation
//!
//! The `compute_viewmodel` method transforms state into a renderable UI
//! representation: column headers with sort arrows, the rows of the current
//! page, one pagination button per page and an empty-state message when the
//! current page has nothing to show.
//!
//! # Example
//!
//! ```rust
//! use zticker::app::list::DEFAULT_ITEMS_PER_PAGE;
//! use zticker::app::AppState;
//! use zticker::source::CoinloreSource;
//! use zticker::ui::theme::Theme;
//!
//! let state = AppState::new(
//!     Box::new(CoinloreSource::default()),
//!     DEFAULT_ITEMS_PER_PAGE,
//!     Theme::default(),
//! );
//! let viewmodel = state.compute_viewmodel();
//! assert!(viewmodel.rows.is_empty());
//! ```

use super::list::{ListViewModel, SortDirection};
use super::modes::InputMode;
use crate::domain::{SortField, Ticker};
use crate::source::DataSource;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeader, DisplayRow, EmptyState, FooterInfo, HeaderInfo, PageButton, PaginationInfo,
    SearchBarInfo, Trend, UIViewModel,
};
use chrono::{DateTime, Utc};
use std::num::NonZeroUsize;

/// Progress of the one-off ticker fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Request not answered yet.
    #[default]
    Pending,

    /// Response decoded.
    Loaded {
        /// Number of records received.
        count: usize,
        /// When the response was handled.
        at: DateTime<Utc>,
    },

    /// Request or decoding failed; the record set is empty.
    Failed {
        /// Human-readable cause.
        message: String,
    },
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and host events.
/// View models are computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// Ticker records and search/sort/page state.
    pub list: ListViewModel,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Outcome of the ticker request.
    pub fetch_status: FetchStatus,

    /// Provider of the ticker endpoint and response decoding.
    pub source: Box<dyn DataSource>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Configured page size; the list may use fewer rows on short panes.
    pub page_size: NonZeroUsize,
}

impl AppState {
    /// Creates a new application state with no records loaded.
    #[must_use]
    pub fn new(source: Box<dyn DataSource>, items_per_page: NonZeroUsize, theme: Theme) -> Self {
        Self {
            list: ListViewModel::new(items_per_page),
            input_mode: InputMode::Normal,
            fetch_status: FetchStatus::Pending,
            source,
            theme,
            page_size: items_per_page,
        }
    }

    /// Whether the search box takes up screen rows.
    #[must_use]
    pub fn shows_search_bar(&self) -> bool {
        self.input_mode.is_search() || !self.list.view_state().search_query.is_empty()
    }

    /// Limits the page size to `capacity` table rows, never exceeding the
    /// configured size and never going below one.
    ///
    /// The record that headed the old page stays on the new current page.
    /// Returns whether the page size changed.
    pub fn fit_page_to(&mut self, capacity: usize) -> bool {
        let target =
            NonZeroUsize::new(capacity.min(self.page_size.get())).unwrap_or(NonZeroUsize::MIN);
        let view = self.list.view_state();
        let current = view.items_per_page;
        if target == current {
            return false;
        }

        let page = match view.current_page {
            0 => 0,
            page => (page - 1).saturating_mul(current.get()) / target.get() + 1,
        };
        tracing::debug!(
            from = current.get(),
            to = target.get(),
            page,
            "page size fitted to pane"
        );
        self.list.set_items_per_page(target);
        self.list.set_page(page);
        true
    }

    /// Computes a renderable UI view model from current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let view = self.list.view_state();
        let filtered = self.list.filtered();
        let filtered_count = filtered.len();
        let page_count = self.list.pages_for(filtered_count);
        let page = self.list.page_of(&filtered);

        let query_lower = view.search_query.to_lowercase();
        let rows: Vec<DisplayRow> = page
            .iter()
            .map(|ticker| Self::compute_display_row(ticker, &query_lower))
            .collect();

        let pages = (1..=page_count)
            .map(|number| PageButton {
                number,
                is_active: number == view.current_page,
            })
            .collect();

        let empty_state = if rows.is_empty() {
            Some(self.compute_empty_state(filtered_count))
        } else {
            None
        };

        UIViewModel {
            header: self.compute_header(filtered_count),
            search_bar: self.compute_search_bar(),
            columns: Self::compute_columns(view.sort_field, view.sort_direction),
            rows,
            pagination: PaginationInfo { pages },
            footer: self.compute_footer(),
            empty_state,
        }
    }

    /// Builds the seven column headers.
    ///
    /// Every header carries the same arrow because the arrow reflects the
    /// list-wide direction, not the column.
    fn compute_columns(active: Option<SortField>, direction: SortDirection) -> Vec<ColumnHeader> {
        SortField::ALL
            .into_iter()
            .zip('1'..='7')
            .map(|(field, key)| ColumnHeader {
                label: field.label(),
                key,
                arrow: direction.arrow(),
                is_active: active == Some(field),
            })
            .collect()
    }

    fn compute_display_row(ticker: &Ticker, query_lower: &str) -> DisplayRow {
        let trend = match ticker.percent_change_24h {
            Some(change) if change > 0.0 => Trend::Up,
            Some(change) if change < 0.0 => Trend::Down,
            _ => Trend::Flat,
        };

        DisplayRow {
            cells: SortField::ALL.into_iter().map(|field| ticker.cell(field)).collect(),
            trend,
            name_highlight: Self::compute_highlight_range(&ticker.name, query_lower),
        }
    }

    /// Character range of `query_lower` inside `name`, matched case-insensitively.
    ///
    /// Returns `None` for an empty query, no match, or names whose lowercase
    /// form has a different character count (indices would not line up).
    fn compute_highlight_range(name: &str, query_lower: &str) -> Option<(usize, usize)> {
        if query_lower.is_empty() {
            return None;
        }

        let name_lower = name.to_lowercase();
        if name_lower.chars().count() != name.chars().count() {
            return None;
        }

        let byte_start = name_lower.find(query_lower)?;
        let start = name_lower[..byte_start].chars().count();
        Some((start, start + query_lower.chars().count()))
    }

    fn compute_header(&self, filtered_count: usize) -> HeaderInfo {
        let status = match &self.fetch_status {
            FetchStatus::Pending => "loading…".to_string(),
            FetchStatus::Loaded { count, at } => {
                format!("{count} tickers @ {} UTC", at.format("%H:%M:%S"))
            }
            FetchStatus::Failed { .. } => "fetch failed".to_string(),
        };

        HeaderInfo {
            title: format!(" Tickers ({filtered_count}) "),
            status,
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.shows_search_bar() {
            Some(SearchBarInfo {
                query: self.list.view_state().search_query.clone(),
                is_editing: self.input_mode.is_search(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "ESC: clear search  Enter: done  Type to filter by name or ID",
            InputMode::Normal => {
                "1-7: sort  h/l: page  g/G: first/last  /: search  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self, filtered_count: usize) -> EmptyState {
        let view = self.list.view_state();

        match &self.fetch_status {
            FetchStatus::Pending => EmptyState {
                message: "Fetching tickers".to_string(),
                subtitle: self.source.endpoint().to_string(),
            },
            FetchStatus::Failed { message } => EmptyState {
                message: "Could not load tickers".to_string(),
                subtitle: message.clone(),
            },
            FetchStatus::Loaded { .. } if self.list.is_empty() => EmptyState {
                message: "No tickers available".to_string(),
                subtitle: "The API returned an empty list".to_string(),
            },
            FetchStatus::Loaded { .. } if filtered_count == 0 => EmptyState {
                message: format!("No tickers match \"{}\"", view.search_query),
                subtitle: "Press / then ESC to clear the search".to_string(),
            },
            FetchStatus::Loaded { .. } => EmptyState {
                message: format!("Page {} is empty", view.current_page),
                subtitle: "Press g to return to the first page".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TickerId;
    use crate::source::CoinloreSource;

    fn state_with(tickers: Vec<Ticker>, per_page: usize) -> AppState {
        let mut state = AppState::new(
            Box::new(CoinloreSource::default()),
            NonZeroUsize::new(per_page).unwrap(),
            Theme::default(),
        );
        state.fetch_status = FetchStatus::Loaded {
            count: tickers.len(),
            at: Utc::now(),
        };
        state.list.load(tickers);
        state
    }

    fn ticker(id: &str, name: &str, change: f64) -> Ticker {
        Ticker {
            id: TickerId::Text(id.to_string()),
            name: name.to_string(),
            percent_change_24h: Some(change),
            ..Ticker::default()
        }
    }

    #[test]
    fn every_column_shows_the_global_arrow() {
        let mut state = state_with(vec![ticker("1", "Bitcoin", 1.0)], 10);
        state.list.set_sort(SortField::Rank);
        state.list.set_sort(SortField::Rank);

        let vm = state.compute_viewmodel();

        assert_eq!(vm.columns.len(), 7);
        assert!(vm.columns.iter().all(|c| c.arrow == "↓"));
        let active: Vec<_> = vm.columns.iter().filter(|c| c.is_active).map(|c| c.label).collect();
        assert_eq!(active, vec!["Rank"]);
    }

    #[test]
    fn one_button_per_page_with_active_marked() {
        let tickers = (0..5).map(|i| ticker(&i.to_string(), "Coin", 0.0)).collect();
        let mut state = state_with(tickers, 2);
        state.list.set_page(2);

        let vm = state.compute_viewmodel();

        let numbers: Vec<_> = vm.pagination.pages.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(vm.pagination.pages[1].is_active);
        assert_eq!(vm.rows.len(), 2);
    }

    #[test]
    fn trend_follows_sign_of_change() {
        let state = state_with(
            vec![ticker("1", "Up", 2.5), ticker("2", "Down", -0.3), ticker("3", "Flat", 0.0)],
            10,
        );

        let trends: Vec<_> = state.compute_viewmodel().rows.iter().map(|r| r.trend).collect();

        assert_eq!(trends, vec![Trend::Up, Trend::Down, Trend::Flat]);
    }

    #[test]
    fn highlight_covers_case_insensitive_match() {
        let mut state = state_with(vec![ticker("1", "Bitcoin Cash", 0.0)], 10);
        state.list.set_search("COIN");

        let vm = state.compute_viewmodel();

        assert_eq!(vm.rows[0].name_highlight, Some((3, 7)));
    }

    #[test]
    fn search_bar_visible_while_query_active() {
        let mut state = state_with(vec![], 10);
        assert!(state.compute_viewmodel().search_bar.is_none());

        state.list.set_search("eth");
        let bar = state.compute_viewmodel().search_bar.unwrap();
        assert_eq!(bar.query, "eth");
        assert!(!bar.is_editing);
    }

    #[test]
    fn empty_state_explains_why_page_is_empty() {
        let mut state = state_with(vec![ticker("1", "Bitcoin", 0.0)], 10);

        state.list.set_search("doge");
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert!(empty.message.contains("doge"));

        state.list.set_search("");
        state.list.set_page(5);
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert_eq!(empty.message, "Page 5 is empty");

        state.fetch_status = FetchStatus::Failed {
            message: "boom".to_string(),
        };
        state.list.load(vec![]);
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert_eq!(empty.subtitle, "boom");
    }

    #[test]
    fn header_counts_filtered_records() {
        let mut state = state_with(vec![ticker("1", "Bitcoin", 0.0), ticker("2", "Ether", 0.0)], 10);
        state.list.set_search("bit");

        assert_eq!(state.compute_viewmodel().header.title, " Tickers (1) ");
    }

    #[test]
    fn short_pane_shrinks_pages_to_fit() {
        let tickers = (0..10).map(|i| ticker(&i.to_string(), "Coin", 0.0)).collect();
        let mut state = state_with(tickers, 10);

        assert!(state.fit_page_to(crate::ui::table_capacity(15, false)));

        let vm = state.compute_viewmodel();
        assert_eq!(vm.rows.len(), 7);
        assert_eq!(vm.pagination.pages.len(), 2);
    }

    #[test]
    fn fitted_page_keeps_its_first_record_visible() {
        let tickers = (0..20).map(|i| ticker(&i.to_string(), "Coin", 0.0)).collect();
        let mut state = state_with(tickers, 10);
        state.list.set_page(2);

        state.fit_page_to(4);

        assert_eq!(state.list.view_state().current_page, 3);
        let ids: Vec<_> = state.list.compute_view().iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["8", "9", "10", "11"]);
    }

    #[test]
    fn tall_pane_restores_configured_page_size() {
        let tickers = (0..10).map(|i| ticker(&i.to_string(), "Coin", 0.0)).collect();
        let mut state = state_with(tickers, 10);

        state.fit_page_to(3);
        assert!(state.fit_page_to(50));
        assert_eq!(state.list.view_state().items_per_page.get(), 10);
        assert!(!state.fit_page_to(50));
    }

    #[test]
    fn no_room_still_pages_one_record_at_a_time() {
        let mut state = state_with(vec![ticker("1", "Bitcoin", 0.0)], 10);

        state.fit_page_to(0);

        assert_eq!(state.list.view_state().items_per_page.get(), 1);
    }
}
