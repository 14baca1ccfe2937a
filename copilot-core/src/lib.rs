//! Co-Pilot Core — dashboard view-model, providers and derived signals.
//!
//! - Ticker parsing and validation
//! - Result records (prediction, indicators, sentiment, backtest)
//! - Provider traits, one per card, with a simulated market behind all four
//! - Analyzer that fans a ticker out to the providers and gathers one report
//! - Pure recommendation and risk/reward derivations
//! - Dashboard state machine (Empty → Busy → Results)
//! - TOML configuration

pub mod advice;
pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod provider;
pub mod rng;
pub mod simulated;
pub mod ticker;

pub use advice::{Action, DerivationError, Recommendation, RiskReward, Strength};
pub use analysis::{AnalysisReport, Analyzer, Card};
pub use config::{ConfigError, CopilotConfig};
pub use dashboard::{AnalysisRequest, Dashboard, TriggerError, View};
pub use domain::{
    BacktestPeriod, BacktestSummary, Direction, IndicatorSet, IndicatorSignal, Prediction,
    Sentiment, SentimentScore,
};
pub use provider::{
    BacktestProvider, IndicatorProvider, PredictionProvider, ProviderError, SentimentProvider,
};
pub use simulated::SimulatedMarket;
pub use ticker::{Ticker, TickerError};
