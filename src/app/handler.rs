//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and host
//! results, translating them into state changes and action sequences.
//!
//! # Architecture
//!
//! 1. Events arrive from the plugin shim (keys, permission and web results)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` and `ListViewModel` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `ConfirmSearch`, `ExitSearch`
//! - **Sorting**: `SortBy`
//! - **Pagination**: `NextPage`, `PrevPage`, `FirstPage`, `LastPage`, `GoToPage`
//! - **Host**: `PermissionsResult`, `TickersFetched`
//!
//! # Example
//!
//! ```rust
//! use zticker::app::list::DEFAULT_ITEMS_PER_PAGE;
//! use zticker::app::{handle_event, AppState, Event};
//! use zticker::source::CoinloreSource;
//! use zticker::ui::theme::Theme;
//!
//! let mut state = AppState::new(
//!     Box::new(CoinloreSource::default()),
//!     DEFAULT_ITEMS_PER_PAGE,
//!     Theme::default(),
//! );
//! let (should_render, actions) = handle_event(&mut state, &Event::SearchMode)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zticker::TickerError>(())
//! ```

use crate::app::state::FetchStatus;
use crate::app::{Action, AppState, InputMode};
use crate::domain::error::Result;
use crate::domain::SortField;

/// Events triggered by user input or host results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts typing into the search box.
    SearchMode,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Leaves typing mode, keeping the query.
    ConfirmSearch,
    /// Clears the query and leaves typing mode.
    ExitSearch,

    /// Sorts by a column, toggling direction when it is already active.
    SortBy(SortField),

    /// Moves to the next page, if there is one.
    NextPage,
    /// Moves to the previous page, if there is one.
    PrevPage,
    /// Moves to page 1.
    FirstPage,
    /// Moves to the last page.
    LastPage,
    /// Moves to a specific one-based page.
    GoToPage(usize),

    /// Reports whether the host granted the requested permissions.
    ///
    /// The ticker request is only issued once web access is granted.
    PermissionsResult {
        /// Whether all permissions were granted.
        granted: bool,
    },

    /// Delivers the completed ticker request.
    TickersFetched {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. `should_render` is `false` when the
/// event left every rendered value unchanged.
///
/// # Errors
///
/// Currently infallible; fetch and decode failures are absorbed into
/// [`FetchStatus::Failed`] rather than propagated, so the plugin keeps running
/// with an empty list.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut query = state.list.view_state().search_query.clone();
            query.push(*c);
            tracing::trace!(query = %query, char = %c, "search query updated");
            state.list.set_search(query);

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            let mut query = state.list.view_state().search_query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.list.set_search(query);

            Ok((true, vec![]))
        }
        Event::ConfirmSearch => {
            tracing::debug!(query = %state.list.view_state().search_query, "search confirmed");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!("search cleared");
            state.input_mode = InputMode::Normal;
            if !state.list.view_state().search_query.is_empty() {
                state.list.set_search(String::new());
            }
            Ok((true, vec![]))
        }
        Event::SortBy(field) => {
            state.list.set_sort(*field);
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let current = state.list.view_state().current_page;
            let target = if current < state.list.page_count() {
                current + 1
            } else {
                current
            };
            Ok((go_to_page(state, target), vec![]))
        }
        Event::PrevPage => {
            let current = state.list.view_state().current_page;
            let target = current.saturating_sub(1).max(1);
            Ok((go_to_page(state, target), vec![]))
        }
        Event::FirstPage => Ok((go_to_page(state, 1), vec![])),
        Event::LastPage => {
            let target = state.list.page_count().max(1);
            Ok((go_to_page(state, target), vec![]))
        }
        Event::GoToPage(page) => Ok((go_to_page(state, *page), vec![])),
        Event::PermissionsResult { granted } => {
            if *granted {
                let url = state.source.endpoint().to_string();
                tracing::debug!(url = %url, "permissions granted, fetching tickers");
                Ok((false, vec![Action::FetchTickers { url }]))
            } else {
                tracing::warn!("web access denied, tickers cannot be fetched");
                state.fetch_status = FetchStatus::Failed {
                    message: "web access permission denied".to_string(),
                };
                Ok((true, vec![]))
            }
        }
        Event::TickersFetched { status, body } => {
            match state.source.decode(*status, body) {
                Ok(tickers) => {
                    tracing::debug!(ticker_count = tickers.len(), "tickers fetched");
                    state.fetch_status = FetchStatus::Loaded {
                        count: tickers.len(),
                        at: chrono::Utc::now(),
                    };
                    state.list.load(tickers);
                }
                Err(e) => {
                    tracing::error!(error = %e, "error fetching tickers");
                    state.fetch_status = FetchStatus::Failed {
                        message: e.to_string(),
                    };
                    state.list.load(vec![]);
                }
            }
            Ok((true, vec![]))
        }
    }
}

/// Sets the current page, reporting whether it changed.
fn go_to_page(state: &mut AppState, page: usize) -> bool {
    if state.list.view_state().current_page == page {
        return false;
    }
    tracing::debug!(page = page, "page changed");
    state.list.set_page(page);
    true
}

/// Span label that leaves out response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::TickersFetched { status, body } => f
                .debug_struct("TickersFetched")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::list::DEFAULT_ITEMS_PER_PAGE;
    use crate::source::CoinloreSource;
    use crate::ui::theme::Theme;
    use std::num::NonZeroUsize;

    const BODY: &[u8] = br#"{"data":[
        {"id":"90","name":"Bitcoin","rank":1,"price_usd":"60000"},
        {"id":"80","name":"Ethereum","rank":2,"price_usd":"3000"},
        {"id":"518","name":"Tether","rank":3,"price_usd":"1"}
    ]}"#;

    fn new_state(per_page: usize) -> AppState {
        AppState::new(
            Box::new(CoinloreSource::new("http://tickers.test/api")),
            NonZeroUsize::new(per_page).unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            Theme::default(),
        )
    }

    fn loaded_state(per_page: usize) -> AppState {
        let mut state = new_state(per_page);
        handle_event(&mut state, &Event::TickersFetched { status: 200, body: BODY.to_vec() })
            .unwrap();
        state
    }

    fn type_query(state: &mut AppState, query: &str) {
        handle_event(state, &Event::SearchMode).unwrap();
        for c in query.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn granted_permissions_request_the_configured_endpoint() {
        let mut state = new_state(10);

        let (render, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: true }).unwrap();

        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::FetchTickers { url: "http://tickers.test/api".to_string() }]
        );
    }

    #[test]
    fn denied_permissions_mark_fetch_failed() {
        let mut state = new_state(10);

        let (render, actions) =
            handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();

        assert!(render);
        assert!(actions.is_empty());
        assert!(matches!(state.fetch_status, FetchStatus::Failed { .. }));
    }

    #[test]
    fn successful_fetch_loads_records() {
        let state = loaded_state(10);

        assert_eq!(state.list.len(), 3);
        assert!(matches!(state.fetch_status, FetchStatus::Loaded { count: 3, .. }));
    }

    #[test]
    fn failed_fetch_empties_records() {
        let mut state = loaded_state(10);

        let (render, _) = handle_event(
            &mut state,
            &Event::TickersFetched { status: 200, body: b"not json".to_vec() },
        )
        .unwrap();

        assert!(render);
        assert!(state.list.is_empty());
        assert!(matches!(state.fetch_status, FetchStatus::Failed { .. }));
    }

    #[test]
    fn chars_are_ignored_outside_search_mode() {
        let mut state = loaded_state(10);

        let (render, _) = handle_event(&mut state, &Event::Char('b')).unwrap();

        assert!(!render);
        assert_eq!(state.list.view_state().search_query, "");
    }

    #[test]
    fn typing_filters_and_resets_page() {
        let mut state = loaded_state(1);
        handle_event(&mut state, &Event::GoToPage(3)).unwrap();

        type_query(&mut state, "eth");

        assert_eq!(state.list.view_state().search_query, "eth");
        assert_eq!(state.list.view_state().current_page, 1);
        let ids: Vec<_> = state.list.filtered().iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, vec!["80", "518"]);
    }

    #[test]
    fn backspace_edits_query() {
        let mut state = loaded_state(10);
        type_query(&mut state, "bit");

        handle_event(&mut state, &Event::Backspace).unwrap();

        assert_eq!(state.list.view_state().search_query, "bi");
    }

    #[test]
    fn confirm_keeps_query_and_exit_clears_it() {
        let mut state = loaded_state(10);
        type_query(&mut state, "bit");

        handle_event(&mut state, &Event::ConfirmSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.list.view_state().search_query, "bit");

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.list.view_state().search_query, "");
    }

    #[test]
    fn sort_by_toggles_direction() {
        let mut state = loaded_state(10);

        handle_event(&mut state, &Event::SortBy(SortField::PriceUsd)).unwrap();
        let asc: Vec<_> = state.list.compute_view().iter().map(|t| t.name.clone()).collect();
        handle_event(&mut state, &Event::SortBy(SortField::PriceUsd)).unwrap();
        let desc: Vec<_> = state.list.compute_view().iter().map(|t| t.name.clone()).collect();

        assert_eq!(asc, vec!["Tether", "Ethereum", "Bitcoin"]);
        assert_eq!(desc, vec!["Bitcoin", "Ethereum", "Tether"]);
    }

    #[test]
    fn page_navigation_stays_within_page_count() {
        let mut state = loaded_state(2);

        let (render, _) = handle_event(&mut state, &Event::PrevPage).unwrap();
        assert!(!render);

        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.list.view_state().current_page, 2);

        let (render, _) = handle_event(&mut state, &Event::NextPage).unwrap();
        assert!(!render);
        assert_eq!(state.list.view_state().current_page, 2);

        handle_event(&mut state, &Event::FirstPage).unwrap();
        assert_eq!(state.list.view_state().current_page, 1);

        handle_event(&mut state, &Event::LastPage).unwrap();
        assert_eq!(state.list.view_state().current_page, 2);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = new_state(10);

        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
