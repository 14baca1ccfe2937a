//! Ticker symbol — the only user input the dashboard accepts.
//!
//! Symbols are normalized (trimmed, upper-cased) before validation so that
//! typing `tsla ` and clicking the `TSLA` quick-select button produce the
//! same value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest symbol accepted (covers share-class suffixes like `BRK.B`).
pub const MAX_TICKER_LEN: usize = 10;

/// Default quick-select list shown under the search bar.
pub const DEFAULT_QUICK_SELECT: [&str; 8] =
    ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA", "META", "NFLX"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickerError {
    #[error("ticker symbol is empty")]
    Empty,

    #[error("ticker symbol '{symbol}' is longer than {max} characters", max = MAX_TICKER_LEN)]
    TooLong { symbol: String },

    #[error("ticker symbol '{symbol}' contains invalid character '{ch}'")]
    InvalidCharacter { symbol: String, ch: char },
}

/// A validated, upper-case ticker symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Normalize and validate raw user input.
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let symbol = raw.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        if symbol.chars().count() > MAX_TICKER_LEN {
            return Err(TickerError::TooLong { symbol });
        }
        let invalid = symbol
            .chars()
            .enumerate()
            .find(|&(i, ch)| {
                !(ch.is_ascii_alphanumeric() || (i > 0 && (ch == '.' || ch == '-')))
            })
            .map(|(_, ch)| ch);
        if let Some(ch) = invalid {
            return Err(TickerError::InvalidCharacter { symbol, ch });
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
