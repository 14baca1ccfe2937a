//! Provider traits and structured error types.
//!
//! The four traits are the seams between the dashboard and its data sources.
//! The dashboard never knows whether a provider is real or simulated, and a
//! failure from one provider only ever affects its own card.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{BacktestPeriod, BacktestSummary, IndicatorSet, Prediction, Sentiment};
use crate::ticker::Ticker;

/// Failure reported by a provider for a single request.
///
/// Displayable in both the CLI and the TUI cards.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProviderError {
    #[error("symbol not found: {symbol}")]
    NotFound { symbol: String },

    #[error("{provider} unavailable: {reason}")]
    Unavailable { provider: String, reason: String },
}

impl ProviderError {
    pub fn not_found(ticker: &Ticker) -> Self {
        Self::NotFound {
            symbol: ticker.to_string(),
        }
    }

    pub fn unavailable(provider: &str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            provider: provider.to_string(),
            reason: reason.into(),
        }
    }
}

/// Market data & trend prediction.
pub trait PredictionProvider: Send + Sync {
    fn name(&self) -> &str;

    fn predict(&self, ticker: &Ticker) -> Result<Prediction, ProviderError>;
}

/// Technical indicators (moving averages, RSI).
pub trait IndicatorProvider: Send + Sync {
    fn name(&self) -> &str;

    fn indicators(&self, ticker: &Ticker) -> Result<IndicatorSet, ProviderError>;
}

/// News sentiment.
pub trait SentimentProvider: Send + Sync {
    fn name(&self) -> &str;

    fn sentiment(&self, ticker: &Ticker) -> Result<Sentiment, ProviderError>;
}

/// Backtest engine.
pub trait BacktestProvider: Send + Sync {
    fn name(&self) -> &str;

    fn backtest(
        &self,
        ticker: &Ticker,
        period: &BacktestPeriod,
    ) -> Result<BacktestSummary, ProviderError>;
}
