//! Ticker domain model.
//!
//! A [`Ticker`] is one cryptocurrency's market snapshot as returned by the
//! ticker API. Records are immutable once fetched and identified by their
//! [`TickerId`].
//!
//! The live API is loose about types: identifiers arrive as strings, prices
//! and market caps arrive as numeric strings, and fields may be absent. The
//! deserializers here accept either JSON numbers or numeric strings and turn
//! anything unusable into `None` instead of rejecting the whole payload.

use crate::domain::field::{SortField, SortValue};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Ticker identity, kept in whatever JSON form the API used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickerId {
    Number(f64),
    Text(String),
}

impl Default for TickerId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for TickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One cryptocurrency market snapshot.
///
/// # Fields
///
/// - `id`: Identity of the record, string or number
/// - `symbol`: Exchange symbol (e.g. `BTC`), when the API provides one
/// - `name`: Display name, empty if absent
/// - `rank`: Market cap rank
/// - `price_usd`, `price_btc`: Spot prices
/// - `percent_change_24h`: Price change over the last 24 hours, in percent
/// - `market_cap_usd`: Market capitalization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ticker {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: TickerId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rank: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub percent_change_24h: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price_btc: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub market_cap_usd: Option<f64>,
}

impl Ticker {
    /// Returns the numeric value of a field, `None` for text fields and
    /// missing values.
    #[must_use]
    pub fn number(&self, field: SortField) -> Option<f64> {
        match self.sort_value(field)? {
            SortValue::Number(n) => Some(n),
            SortValue::Text(_) => None,
        }
    }

    /// Returns the value the sort comparator uses for `field`.
    #[must_use]
    pub fn sort_value(&self, field: SortField) -> Option<SortValue<'_>> {
        match field {
            SortField::Id => Some(match &self.id {
                TickerId::Number(n) => SortValue::Number(*n),
                TickerId::Text(s) => SortValue::Text(s),
            }),
            SortField::Name => Some(SortValue::Text(&self.name)),
            SortField::Rank => self.rank.map(SortValue::Number),
            SortField::PriceUsd => self.price_usd.map(SortValue::Number),
            SortField::PercentChange24h => self.percent_change_24h.map(SortValue::Number),
            SortField::PriceBtc => self.price_btc.map(SortValue::Number),
            SortField::MarketCapUsd => self.market_cap_usd.map(SortValue::Number),
        }
    }

    /// Formats a field for a table cell. Missing values render as `-`.
    #[must_use]
    pub fn cell(&self, field: SortField) -> String {
        match field {
            SortField::Id => self.id.to_string(),
            SortField::Name => match &self.symbol {
                Some(symbol) if !symbol.is_empty() => format!("{} ({symbol})", self.name),
                _ => self.name.clone(),
            },
            _ => self
                .number(field)
                .map_or_else(|| "-".to_string(), |n| n.to_string()),
        }
    }

    /// Whether this ticker matches a search query.
    ///
    /// Matches when the lower-cased name contains the lower-cased query, or
    /// when the string form of the id contains the lower-cased query. An
    /// empty query matches everything.
    #[must_use]
    pub fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.id.to_string().contains(query_lower)
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_text(deserializer)?.unwrap_or_default())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<TickerId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64().map_or_else(TickerId::default, TickerId::Number),
        Some(Value::String(s)) => TickerId::Text(s),
        _ => TickerId::default(),
    })
}
