//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim in `main.rs` translates each action into Zellij API calls, which
//! keeps the library free of host calls and testable off-host.
//!
//! # Example
//!
//! ```rust
//! use zticker::app::Action;
//!
//! let action = Action::FetchTickers {
//!     url: "https://api.coinlore.net/api/tickers/".to_string(),
//! };
//! assert_ne!(action, Action::CloseFocus);
//! ```

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one-off GET for the ticker list.
    ///
    /// The response comes back as a `WebRequestResult` host event and is fed
    /// to the handler as [`Event::TickersFetched`](crate::app::Event::TickersFetched).
    FetchTickers {
        /// Endpoint to request.
        url: String,
    },
}
