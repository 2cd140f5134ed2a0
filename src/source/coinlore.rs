//! Coinlore ticker API source.
//!
//! The API answers `GET /api/tickers/` with an envelope whose `data` array
//! holds the tickers and whose `info` object carries paging metadata the
//! plugin does not use:
//!
//! ```json
//! {
//!   "data": [
//!     { "id": "90", "symbol": "BTC", "name": "Bitcoin", "rank": 1,
//!       "price_usd": "6456.52", "percent_change_24h": "-1.47",
//!       "price_btc": "1.00", "market_cap_usd": "111586042785.56" }
//!   ],
//!   "info": { "coins_num": 1969, "time": 1538560355 }
//! }
//! ```

use crate::domain::error::{Result, TickerError};
use crate::domain::Ticker;
use crate::source::DataSource;
use serde::Deserialize;

/// Default ticker endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.coinlore.net/api/tickers/";

/// Response envelope. A missing `data` key decodes as an empty list.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Vec<Ticker>>,
}

/// Coinlore-compatible ticker source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinloreSource {
    endpoint: String,
}

impl CoinloreSource {
    /// Creates a source for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for CoinloreSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl DataSource for CoinloreSource {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn decode(&self, status: u16, body: &[u8]) -> Result<Vec<Ticker>> {
        let _span = tracing::debug_span!("coinlore_decode",
            status = status,
            body_len = body.len()
        )
        .entered();

        if !(200..300).contains(&status) {
            let detail = String::from_utf8_lossy(body);
            return Err(TickerError::Fetch(format!(
                "{} returned status {status}: {}",
                self.endpoint,
                detail.trim()
            )));
        }

        let envelope: Envelope = serde_json::from_slice(body)?;
        let tickers = envelope.data.unwrap_or_default();

        tracing::debug!(ticker_count = tickers.len(), "ticker payload decoded");
        Ok(tickers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_data_array() {
        let source = CoinloreSource::default();
        let body = br#"{
            "data": [
                {"id":"90","symbol":"BTC","name":"Bitcoin","rank":1,"price_usd":"6456.52"},
                {"id":"80","symbol":"ETH","name":"Ethereum","rank":2,"price_usd":"229.21"}
            ],
            "info": {"coins_num": 1969, "time": 1538560355}
        }"#;

        let tickers = source.decode(200, body).unwrap();

        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[1].name, "Ethereum");
        assert_eq!(tickers[1].price_usd, Some(229.21));
    }

    #[test]
    fn missing_data_key_is_empty_list() {
        let tickers = CoinloreSource::default().decode(200, br#"{"info":{}}"#).unwrap();
        assert!(tickers.is_empty());
    }

    #[test]
    fn null_data_is_empty_list() {
        let tickers = CoinloreSource::default().decode(200, br#"{"data":null}"#).unwrap();
        assert!(tickers.is_empty());
    }

    #[test]
    fn malformed_json_is_decode_error() {
        let err = CoinloreSource::default().decode(200, b"<html>").unwrap_err();
        assert!(matches!(err, TickerError::Decode(_)));
    }

    #[test]
    fn non_success_status_is_fetch_error() {
        let err = CoinloreSource::new("http://localhost/tickers")
            .decode(400, b"connection refused")
            .unwrap_err();

        match err {
            TickerError::Fetch(message) => {
                assert!(message.contains("status 400"));
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_is_configurable() {
        assert_eq!(CoinloreSource::default().endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(CoinloreSource::new("http://x").endpoint(), "http://x");
    }
}
