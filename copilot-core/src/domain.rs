//! Result records produced by one analysis cycle.
//!
//! Each record is created fresh per trigger and fully replaced on the next
//! one; nothing here is merged or mutated in place.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Round to a fixed number of decimals, matching how values are displayed.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Predicted trend direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "↑ Upward",
            Direction::Down => "↓ Downward",
        }
    }

    pub fn is_up(self) -> bool {
        self == Direction::Up
    }
}

/// Trend prediction for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    /// Model confidence in percent.
    pub confidence: f64,
    /// Expected move over `timeframe`, in percent.
    pub predicted_change: f64,
    pub timeframe: String,
}

/// Overbought / oversold classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl IndicatorSignal {
    pub fn label(self) -> &'static str {
        match self {
            IndicatorSignal::Overbought => "Overbought",
            IndicatorSignal::Oversold => "Oversold",
            IndicatorSignal::Neutral => "Neutral",
        }
    }
}

/// Technical indicator snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub ma20: f64,
    pub ma50: f64,
    /// Relative Strength Index, 0..=100.
    pub rsi: f64,
    pub signal: IndicatorSignal,
}

/// Overall news mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentScore {
    Positive,
    Negative,
    Neutral,
}

impl SentimentScore {
    pub fn label(self) -> &'static str {
        match self {
            SentimentScore::Positive => "Positive",
            SentimentScore::Negative => "Negative",
            SentimentScore::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub score: SentimentScore,
    /// Confidence in the mood, percent.
    pub percentage: u8,
    pub headline_count: u32,
    pub updated_label: String,
}

/// Lookback window for a backtest, in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacktestPeriod {
    pub days: u32,
}

impl BacktestPeriod {
    pub fn days(days: u32) -> Self {
        Self { days }
    }
}

impl Default for BacktestPeriod {
    fn default() -> Self {
        Self { days: 30 }
    }
}

impl fmt::Display for BacktestPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.days)
        }
    }
}

/// Hypothetical performance of following the signal over a past period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    pub profit_pct: f64,
    pub trade_count: u32,
    pub win_rate_pct: f64,
    pub period: String,
}
