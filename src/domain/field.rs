//! Sortable ticker fields and their ordering rules.
//!
//! Each table column maps to one [`SortField`]. Sorting compares the
//! [`SortValue`] a ticker exposes for that field using the value's native
//! ordering: numbers numerically, text lexicographically.

use crate::domain::error::TickerError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A ticker column the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Name,
    Rank,
    PriceUsd,
    PercentChange24h,
    PriceBtc,
    MarketCapUsd,
}

impl SortField {
    /// All fields in table column order.
    pub const ALL: [Self; 7] = [
        Self::Id,
        Self::Name,
        Self::Rank,
        Self::PriceUsd,
        Self::PercentChange24h,
        Self::PriceBtc,
        Self::MarketCapUsd,
    ];

    /// Wire name of the field, identical to the JSON key in the API payload.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Rank => "rank",
            Self::PriceUsd => "price_usd",
            Self::PercentChange24h => "percent_change_24h",
            Self::PriceBtc => "price_btc",
            Self::MarketCapUsd => "market_cap_usd",
        }
    }

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Rank => "Rank",
            Self::PriceUsd => "Price (USD)",
            Self::PercentChange24h => "Change (24h)",
            Self::PriceBtc => "Price (BTC)",
            Self::MarketCapUsd => "Market Cap (USD)",
        }
    }

    /// Field bound to a number key (`1`..`7`), in column order.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let index = digit.to_digit(10)?.checked_sub(1)?;
        Self::ALL.get(usize::try_from(index).ok()?).copied()
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s.trim())
            .ok_or_else(|| TickerError::Config(format!("unknown sort field {s:?}")))
    }
}

/// A field value as seen by the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    /// Ascending total order over optional sort values.
    ///
    /// Numbers compare with [`f64::total_cmp`], text compares by code point.
    /// Numbers order before text, and missing values order after everything
    /// present. Descending order is exactly `compare(a, b).reverse()`.
    #[must_use]
    pub fn compare(a: Option<Self>, b: Option<Self>) -> Ordering {
        match (a, b) {
            (Some(Self::Number(x)), Some(Self::Number(y))) => x.total_cmp(&y),
            (Some(Self::Text(x)), Some(Self::Text(y))) => x.cmp(y),
            (Some(Self::Number(_)), Some(Self::Text(_))) | (Some(_), None) => Ordering::Less,
            (Some(Self::Text(_)), Some(Self::Number(_))) | (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
