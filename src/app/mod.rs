//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain, data
//! source and UI layers. It implements the event-driven flow that powers the
//! interactive list.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────────── Web Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`list`]: Ticker list view model (sort, filter, paginate)
//! - [`modes`]: Input mode type
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod list;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use list::{ListViewModel, SortDirection, ViewState};
pub use modes::InputMode;
pub use state::{AppState, FetchStatus};
