//! Configuration — TOML file with simulation, dashboard and analysis sections.
//!
//! A missing default config file is not an error (defaults apply); a file that
//! exists but does not parse or validate is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::BacktestPeriod;
use crate::ticker::{Ticker, DEFAULT_QUICK_SELECT};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulated-market knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Simulated provider latency per analysis, in milliseconds.
    pub latency_ms: u64,
    /// Master seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Probability in [0, 1] that any single provider call fails.
    pub failure_rate: f64,
    /// Symbols every provider reports as not found.
    pub unknown_symbols: Vec<String>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1500,
            seed: None,
            failure_rate: 0.0,
            unknown_symbols: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub quick_select: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            quick_select: DEFAULT_QUICK_SELECT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub prediction_timeframe: String,
    pub backtest_period_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            prediction_timeframe: "24 hours".into(),
            backtest_period_days: 30,
        }
    }
}

impl AnalysisConfig {
    pub fn backtest_period(&self) -> BacktestPeriod {
        BacktestPeriod::days(self.backtest_period_days)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopilotConfig {
    pub simulation: SimulationConfig,
    pub dashboard: DashboardConfig,
    pub analysis: AnalysisConfig,
}

impl CopilotConfig {
    /// `<config_dir>/copilot/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("copilot").join("config.toml"))
    }

    /// Load from an explicit path (must exist) or the default path (may be missing).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rate = self.simulation.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Invalid(format!(
                "simulation.failure_rate must be within [0, 1], got {rate}"
            )));
        }
        if self.analysis.backtest_period_days == 0 {
            return Err(ConfigError::Invalid(
                "analysis.backtest_period_days must be at least 1".into(),
            ));
        }
        for symbol in &self.dashboard.quick_select {
            Ticker::parse(symbol).map_err(|e| {
                ConfigError::Invalid(format!("dashboard.quick_select: {e}"))
            })?;
        }
        Ok(())
    }

    /// Quick-select entries as validated tickers, duplicates removed.
    pub fn quick_select(&self) -> Vec<Ticker> {
        let mut tickers: Vec<Ticker> = Vec::new();
        for symbol in &self.dashboard.quick_select {
            if let Ok(t) = Ticker::parse(symbol) {
                if !tickers.contains(&t) {
                    tickers.push(t);
                }
            }
        }
        tickers
    }
}
