//! Simulated market — a single type implementing all four provider traits.
//!
//! Every call sleeps for the configured latency and then draws its values.
//! Ranges and category weights mirror what the dashboard was designed around:
//!
//! | Field              | Range / distribution                          |
//! |--------------------|-----------------------------------------------|
//! | direction          | up 50% / down 50%                             |
//! | confidence         | 60..90, 1 decimal                             |
//! | predicted change   | -2..4, 2 decimals                             |
//! | ma20 / ma50        | 100..300, 2 decimals                          |
//! | rsi                | 0..100, 1 decimal                             |
//! | indicator signal   | overbought 50% / oversold 25% / neutral 25%   |
//! | sentiment score    | positive 50% / negative 25% / neutral 25%     |
//! | sentiment %        | 30..70, integer                               |
//! | backtest profit    | -10..20, 2 decimals                           |
//! | trade count        | 5..=24                                        |
//! | win rate           | 40..80, 1 decimal                             |

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{AnalysisConfig, SimulationConfig};
use crate::domain::{
    round_to, BacktestPeriod, BacktestSummary, Direction, IndicatorSet, IndicatorSignal,
    Prediction, Sentiment, SentimentScore,
};
use crate::provider::{
    BacktestProvider, IndicatorProvider, PredictionProvider, ProviderError, SentimentProvider,
};
use crate::rng::{SeedHierarchy, Stream};
use crate::ticker::Ticker;

const HEADLINES_ANALYZED: u32 = 3;
const UPDATED_LABEL: &str = "Just now";

#[derive(Debug)]
pub struct SimulatedMarket {
    latency: Duration,
    seeds: Option<SeedHierarchy>,
    failure_rate: f64,
    unknown_symbols: HashSet<String>,
    timeframe: String,
    /// Per-stream call counters so repeated analyses of one ticker differ.
    cycles: [AtomicU64; 4],
}

impl SimulatedMarket {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            seeds: None,
            failure_rate: 0.0,
            unknown_symbols: HashSet::new(),
            timeframe: AnalysisConfig::default().prediction_timeframe,
            cycles: Default::default(),
        }
    }

    pub fn from_config(sim: &SimulationConfig, analysis: &AnalysisConfig) -> Self {
        let mut market = Self::new(Duration::from_millis(sim.latency_ms))
            .with_failure_rate(sim.failure_rate)
            .with_unknown_symbols(sim.unknown_symbols.iter().map(String::as_str))
            .with_timeframe(analysis.prediction_timeframe.clone());
        if let Some(seed) = sim.seed {
            market = market.with_seed(seed);
        }
        market
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeds = Some(SeedHierarchy::new(seed));
        self
    }

    /// Clamped to [0, 1].
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
        self
    }

    pub fn with_unknown_symbols<'a>(mut self, symbols: impl IntoIterator<Item = &'a str>) -> Self {
        self.unknown_symbols = symbols
            .into_iter()
            .map(|s| s.trim().to_ascii_uppercase())
            .collect();
        self
    }

    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = timeframe.into();
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    fn rng(&self, stream: Stream, ticker: &Ticker) -> StdRng {
        let cycle = self.cycles[stream.index()].fetch_add(1, Ordering::Relaxed);
        match &self.seeds {
            Some(seeds) => seeds.rng_for(stream, ticker, cycle),
            None => StdRng::from_entropy(),
        }
    }

    /// Shared envelope for every provider call: latency, lookup, failure roll.
    fn simulate<T>(
        &self,
        stream: Stream,
        ticker: &Ticker,
        draw: impl FnOnce(&mut StdRng) -> T,
    ) -> Result<T, ProviderError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        if self.unknown_symbols.contains(ticker.as_str()) {
            return Err(ProviderError::not_found(ticker));
        }
        let mut rng = self.rng(stream, ticker);
        if self.failure_rate > 0.0 && rng.gen_bool(self.failure_rate) {
            tracing::debug!(stream = stream.tag(), %ticker, "simulated provider outage");
            return Err(ProviderError::unavailable(
                stream.tag(),
                "simulated outage",
            ));
        }
        Ok(draw(&mut rng))
    }
}

/// 50% first, 25% second, 25% third: two chained coin flips.
fn weighted_pick<T>(rng: &mut StdRng, first: T, second: T, third: T) -> T {
    if rng.gen::<f64>() > 0.5 {
        first
    } else if rng.gen::<f64>() > 0.5 {
        second
    } else {
        third
    }
}

impl PredictionProvider for SimulatedMarket {
    fn name(&self) -> &str {
        "simulated-prediction"
    }

    fn predict(&self, ticker: &Ticker) -> Result<Prediction, ProviderError> {
        self.simulate(Stream::Prediction, ticker, |rng| Prediction {
            direction: if rng.gen::<f64>() > 0.5 {
                Direction::Up
            } else {
                Direction::Down
            },
            confidence: round_to(rng.gen::<f64>() * 30.0 + 60.0, 1),
            predicted_change: round_to(rng.gen::<f64>() * 6.0 - 2.0, 2),
            timeframe: self.timeframe.clone(),
        })
    }
}

impl IndicatorProvider for SimulatedMarket {
    fn name(&self) -> &str {
        "simulated-indicators"
    }

    fn indicators(&self, ticker: &Ticker) -> Result<IndicatorSet, ProviderError> {
        self.simulate(Stream::Indicators, ticker, |rng| IndicatorSet {
            ma20: round_to(rng.gen::<f64>() * 200.0 + 100.0, 2),
            ma50: round_to(rng.gen::<f64>() * 200.0 + 100.0, 2),
            rsi: round_to(rng.gen::<f64>() * 100.0, 1),
            signal: weighted_pick(
                rng,
                IndicatorSignal::Overbought,
                IndicatorSignal::Oversold,
                IndicatorSignal::Neutral,
            ),
        })
    }
}

impl SentimentProvider for SimulatedMarket {
    fn name(&self) -> &str {
        "simulated-sentiment"
    }

    fn sentiment(&self, ticker: &Ticker) -> Result<Sentiment, ProviderError> {
        self.simulate(Stream::Sentiment, ticker, |rng| Sentiment {
            score: weighted_pick(
                rng,
                SentimentScore::Positive,
                SentimentScore::Negative,
                SentimentScore::Neutral,
            ),
            percentage: (rng.gen::<f64>() * 40.0 + 30.0).round() as u8,
            headline_count: HEADLINES_ANALYZED,
            updated_label: UPDATED_LABEL.to_string(),
        })
    }
}

impl BacktestProvider for SimulatedMarket {
    fn name(&self) -> &str {
        "simulated-backtest"
    }

    fn backtest(
        &self,
        ticker: &Ticker,
        period: &BacktestPeriod,
    ) -> Result<BacktestSummary, ProviderError> {
        self.simulate(Stream::Backtest, ticker, |rng| BacktestSummary {
            profit_pct: round_to(rng.gen::<f64>() * 30.0 - 10.0, 2),
            trade_count: (rng.gen::<f64>() * 20.0 + 5.0).floor() as u32,
            win_rate_pct: round_to(rng.gen::<f64>() * 40.0 + 40.0, 1),
            period: period.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> SimulatedMarket {
        SimulatedMarket::new(Duration::ZERO).with_seed(42)
    }

    fn ticker(s: &str) -> Ticker {
        Ticker::parse(s).unwrap()
    }

    #[test]
    fn prediction_within_ranges() {
        let market = instant();
        for _ in 0..200 {
            let p = market.predict(&ticker("AAPL")).unwrap();
            assert!((60.0..=90.0).contains(&p.confidence));
            assert!((-2.0..=4.0).contains(&p.predicted_change));
            assert_eq!(p.timeframe, "24 hours");
        }
    }

    #[test]
    fn indicators_within_ranges() {
        let market = instant();
        for _ in 0..200 {
            let i = market.indicators(&ticker("MSFT")).unwrap();
            assert!((100.0..=300.0).contains(&i.ma20));
            assert!((100.0..=300.0).contains(&i.ma50));
            assert!((0.0..=100.0).contains(&i.rsi));
        }
    }

    #[test]
    fn sentiment_within_ranges() {
        let market = instant();
        for _ in 0..200 {
            let s = market.sentiment(&ticker("NVDA")).unwrap();
            assert!((30..=70).contains(&s.percentage));
            assert_eq!(s.headline_count, 3);
            assert_eq!(s.updated_label, "Just now");
        }
    }

    #[test]
    fn backtest_within_ranges() {
        let market = instant();
        let period = BacktestPeriod::default();
        for _ in 0..200 {
            let b = market.backtest(&ticker("TSLA"), &period).unwrap();
            assert!((-10.0..=20.0).contains(&b.profit_pct));
            assert!((5..=24).contains(&b.trade_count));
            assert!((40.0..=80.0).contains(&b.win_rate_pct));
            assert_eq!(b.period, "30 days");
        }
    }

    #[test]
    fn seeded_markets_are_reproducible() {
        let a = instant().predict(&ticker("AAPL")).unwrap();
        let b = instant().predict(&ticker("AAPL")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_calls_advance_the_cycle() {
        let market = instant();
        let first = market.indicators(&ticker("AAPL")).unwrap();
        let second = market.indicators(&ticker("AAPL")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn signal_weights_roughly_half_quarter_quarter() {
        let market = instant();
        let n = 4000;
        let overbought = (0..n)
            .filter(|_| {
                market.indicators(&ticker("SPY")).unwrap().signal == IndicatorSignal::Overbought
            })
            .count() as f64
            / n as f64;
        assert!((0.45..0.55).contains(&overbought), "overbought share {overbought}");
    }

    #[test]
    fn unknown_symbol_is_not_found() {
        let market = instant().with_unknown_symbols(["zzzz"]);
        let err = market.predict(&ticker("ZZZZ")).unwrap_err();
        assert_eq!(err, ProviderError::NotFound { symbol: "ZZZZ".into() });
        assert!(market.predict(&ticker("AAPL")).is_ok());
    }

    #[test]
    fn full_failure_rate_always_unavailable() {
        let market = instant().with_failure_rate(1.0);
        assert!(matches!(
            market.sentiment(&ticker("AAPL")),
            Err(ProviderError::Unavailable { .. })
        ));
    }

    #[test]
    fn failure_rate_is_clamped() {
        let market = instant().with_failure_rate(7.0);
        assert!(market.backtest(&ticker("AAPL"), &BacktestPeriod::default()).is_err());
        let market = instant().with_failure_rate(f64::NAN);
        assert!(market.backtest(&ticker("AAPL"), &BacktestPeriod::default()).is_ok());
    }

    #[test]
    fn from_config_applies_settings() {
        let sim = SimulationConfig {
            latency_ms: 5,
            seed: Some(1),
            failure_rate: 0.0,
            unknown_symbols: vec!["XYZ".into()],
        };
        let analysis = AnalysisConfig {
            prediction_timeframe: "1 week".into(),
            backtest_period_days: 90,
        };
        let market = SimulatedMarket::from_config(&sim, &analysis);
        assert_eq!(market.latency(), Duration::from_millis(5));
        assert_eq!(market.predict(&ticker("AAPL")).unwrap().timeframe, "1 week");
        assert!(market.indicators(&ticker("XYZ")).is_err());
    }
}
