//! Zellij plugin entry point.
//!
//! Thin shim between the Zellij host API and the zticker library: it
//! translates host events into [`zticker::Event`]s, runs them through
//! [`handle_event`], and executes the returned [`Action`]s with host calls.
//! No zellij host function is called anywhere else in the crate.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zticker::{handle_event, Action, Config, Event, InputMode, SortField};

register_plugin!(State);

/// Context key/value attached to the ticker request so its result can be
/// told apart from any other web response.
const REQUEST_CONTEXT_KEY: &str = "request";
const REQUEST_CONTEXT_TICKERS: &str = "tickers";

struct State {
    app: zticker::AppState,
    /// Pane size from the last render, as `(rows, cols)`.
    pane: (usize, usize),
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zticker::initialize(&Config::default()),
            pane: (0, 0),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = zticker::observability::init_tracing(&config) {
            eprintln!("zticker: tracing disabled: {e}");
        }

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(
            endpoint = %config.endpoint,
            page_size = config.page_size.get(),
            "parsed configuration"
        );
        self.app = zticker::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard =
            tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Event::PermissionsResult {
                    granted: matches!(status, PermissionStatus::Granted),
                }
            }
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.pane = (rows, cols);
        let capacity = zticker::ui::table_capacity(rows, self.app.shows_search_bar());
        self.app.fit_page_to(capacity);
        zticker::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if self.app.input_mode == InputMode::Search {
            return match key.bare_key {
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Enter => Some(Event::ConfirmSearch),
                BareKey::Backspace => Some(Event::Backspace),
                BareKey::Char(c) => Some(Event::Char(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Char('h') | BareKey::Left => Event::PrevPage,
            BareKey::Char('l') | BareKey::Right => Event::NextPage,
            BareKey::Char('g') => Event::FirstPage,
            BareKey::Char('G') => Event::LastPage,
            BareKey::Char(c) => Event::SortBy(SortField::from_digit(c)?),
            _ => return None,
        })
    }

    /// Turns a left click on a page button into a page jump.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let Mouse::LeftClick(line, column) = mouse else {
            return None;
        };
        // host positions are zero-based, the layout is drawn one-based
        let row = usize::try_from(line).ok()? + 1;
        let (rows, cols) = self.pane;

        let viewmodel = self.app.compute_viewmodel();
        let page = zticker::ui::page_at(&viewmodel, rows, cols, row, column + 1)?;
        tracing::debug!(page, "page button clicked");
        Some(Event::GoToPage(page))
    }

    fn map_web_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        if context.get(REQUEST_CONTEXT_KEY).map(String::as_str) != Some(REQUEST_CONTEXT_TICKERS) {
            tracing::debug!(?context, "ignoring web result with unknown context");
            return None;
        }

        tracing::debug!(status, body_len = body.len(), "ticker response received");
        Some(Event::TickersFetched { status, body })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchTickers { url } => {
                tracing::debug!(url = %url, "requesting tickers");
                let context = BTreeMap::from([(
                    REQUEST_CONTEXT_KEY.to_string(),
                    REQUEST_CONTEXT_TICKERS.to_string(),
                )]);
                web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);
            }
        }
    }
}
