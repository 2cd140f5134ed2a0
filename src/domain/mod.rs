//! Domain layer for the zticker plugin.
//!
//! Core types shared by every other layer, independent of Zellij APIs:
//!
//! - [`error`]: Error types and result aliases
//! - [`ticker`]: The ticker record as delivered by the data source
//! - [`field`]: Sortable ticker fields and their ordering rules
//!
//! # Examples
//!
//! ```
//! use zticker::domain::{SortField, Ticker};
//!
//! let ticker: Ticker = serde_json::from_str(
//!     r#"{"id":"90","name":"Bitcoin","rank":1,"price_usd":"6456.52"}"#,
//! ).unwrap();
//! assert_eq!(ticker.name, "Bitcoin");
//! assert_eq!(ticker.number(SortField::PriceUsd), Some(6456.52));
//! ```

pub mod error;
pub mod field;
pub mod ticker;

pub use error::{Result, TickerError};
pub use field::{SortField, SortValue};
pub use ticker::{Ticker, TickerId};
