//! Data source boundary for ticker records.
//!
//! The plugin never performs I/O itself: the host runs the HTTP request and
//! hands back the status and body. A [`DataSource`] names the endpoint to
//! request and turns the raw response into tickers, which keeps the decoding
//! rules testable without a host.
//!
//! # Implementations
//!
//! - [`CoinloreSource`]: the `{ "data": [...] }` envelope served by the
//!   Coinlore ticker API (default)
//!
//! # Examples
//!
//! ```
//! use zticker::source::{CoinloreSource, DataSource};
//!
//! let source = CoinloreSource::default();
//! let tickers = source.decode(200, br#"{"data":[{"id":"90","name":"Bitcoin"}]}"#)?;
//! assert_eq!(tickers.len(), 1);
//! # Ok::<(), zticker::TickerError>(())
//! ```

pub mod coinlore;

pub use coinlore::{CoinloreSource, DEFAULT_ENDPOINT};

use crate::domain::{Result, Ticker};

/// Abstraction over ticker providers.
///
/// Implementations must be pure: `decode` may only look at its arguments, so
/// a response can be replayed in tests.
pub trait DataSource: std::fmt::Debug {
    /// URL the host should `GET`.
    fn endpoint(&self) -> &str;

    /// Decodes a completed response into ticker records.
    ///
    /// # Errors
    ///
    /// Returns [`TickerError::Fetch`](crate::TickerError::Fetch) for non-2xx
    /// statuses and [`TickerError::Decode`](crate::TickerError::Decode) for
    /// bodies that are not a valid envelope.
    fn decode(&self, status: u16, body: &[u8]) -> Result<Vec<Ticker>>;
}
