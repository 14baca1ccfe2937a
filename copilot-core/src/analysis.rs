//! Analyzer — fans one ticker out to the four providers and gathers a report.
//!
//! The providers are queried concurrently with `rayon::join`. Callers that
//! want the calls to overlap regardless of core count run `analyze` inside
//! the pool from [`provider_pool`]. The report is only assembled after all
//! four calls have returned, so a partial report never exists.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::advice::{recommendation, risk_reward, Recommendation, RiskReward};
use crate::config::CopilotConfig;
use crate::domain::{BacktestPeriod, BacktestSummary, IndicatorSet, Prediction, Sentiment};
use crate::provider::{
    BacktestProvider, IndicatorProvider, PredictionProvider, ProviderError, SentimentProvider,
};
use crate::simulated::SimulatedMarket;
use crate::ticker::Ticker;

/// One of the four provider-backed cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Card {
    Prediction,
    Indicators,
    Sentiment,
    Backtest,
}

impl Card {
    pub fn title(self) -> &'static str {
        match self {
            Card::Prediction => "Trend Prediction",
            Card::Indicators => "Technical Indicators",
            Card::Sentiment => "Market Sentiment",
            Card::Backtest => "Backtest Simulator",
        }
    }
}

/// Everything one trigger cycle produced. Each slot succeeds or fails alone.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub ticker: Ticker,
    pub prediction: Result<Prediction, ProviderError>,
    pub indicators: Result<IndicatorSet, ProviderError>,
    pub sentiment: Result<Sentiment, ProviderError>,
    pub backtest: Result<BacktestSummary, ProviderError>,
    pub generated_at: DateTime<Local>,
    pub elapsed_ms: u64,
}

impl AnalysisReport {
    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref().ok()
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        recommendation(self.prediction())
    }

    pub fn risk_reward(&self) -> Option<RiskReward> {
        risk_reward(self.prediction())
    }

    /// Failed cards, in display order.
    pub fn failures(&self) -> Vec<(Card, &ProviderError)> {
        let mut out = Vec::new();
        if let Err(e) = &self.prediction {
            out.push((Card::Prediction, e));
        }
        if let Err(e) = &self.indicators {
            out.push((Card::Indicators, e));
        }
        if let Err(e) = &self.sentiment {
            out.push((Card::Sentiment, e));
        }
        if let Err(e) = &self.backtest {
            out.push((Card::Backtest, e));
        }
        out
    }

    pub fn is_complete(&self) -> bool {
        self.failures().is_empty()
    }
}

/// Rayon pool sized so the four provider calls overlap.
pub fn provider_pool() -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .thread_name(|i| format!("copilot-provider-{i}"))
        .build()
}

pub struct Analyzer {
    prediction: Arc<dyn PredictionProvider>,
    indicators: Arc<dyn IndicatorProvider>,
    sentiment: Arc<dyn SentimentProvider>,
    backtest: Arc<dyn BacktestProvider>,
    period: BacktestPeriod,
}

impl Analyzer {
    pub fn new(
        prediction: Arc<dyn PredictionProvider>,
        indicators: Arc<dyn IndicatorProvider>,
        sentiment: Arc<dyn SentimentProvider>,
        backtest: Arc<dyn BacktestProvider>,
        period: BacktestPeriod,
    ) -> Self {
        Self {
            prediction,
            indicators,
            sentiment,
            backtest,
            period,
        }
    }

    /// All four seams served by one simulated market.
    pub fn simulated(market: Arc<SimulatedMarket>, period: BacktestPeriod) -> Self {
        Self::new(
            market.clone(),
            market.clone(),
            market.clone(),
            market,
            period,
        )
    }

    pub fn from_config(config: &CopilotConfig) -> Self {
        let market = SimulatedMarket::from_config(&config.simulation, &config.analysis);
        Self::simulated(Arc::new(market), config.analysis.backtest_period())
    }

    pub fn period(&self) -> BacktestPeriod {
        self.period
    }

    /// Name of the provider behind `card`.
    pub fn provider_name(&self, card: Card) -> &str {
        match card {
            Card::Prediction => self.prediction.name(),
            Card::Indicators => self.indicators.name(),
            Card::Sentiment => self.sentiment.name(),
            Card::Backtest => self.backtest.name(),
        }
    }

    pub fn analyze(&self, ticker: &Ticker) -> AnalysisReport {
        let started = Instant::now();
        tracing::info!(%ticker, "analysis started");

        let ((prediction, indicators), (sentiment, backtest)) = rayon::join(
            || {
                rayon::join(
                    || self.prediction.predict(ticker),
                    || self.indicators.indicators(ticker),
                )
            },
            || {
                rayon::join(
                    || self.sentiment.sentiment(ticker),
                    || self.backtest.backtest(ticker, &self.period),
                )
            },
        );

        let report = AnalysisReport {
            ticker: ticker.clone(),
            prediction,
            indicators,
            sentiment,
            backtest,
            generated_at: Local::now(),
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        for (card, err) in report.failures() {
            tracing::warn!(
                %ticker,
                card = card.title(),
                provider = self.provider_name(card),
                error = %err,
                "provider failed"
            );
        }
        tracing::info!(
            %ticker,
            elapsed_ms = report.elapsed_ms,
            failed = report.failures().len(),
            "analysis finished"
        );
        report
    }
}
