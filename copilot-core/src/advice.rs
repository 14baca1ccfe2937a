//! Derived signals: buy/sell/hold recommendation and risk/reward.
//!
//! Both are pure functions of a [`Prediction`] and are recomputed on every
//! read. Nothing here is stored alongside the analysis report.

use serde::Serialize;
use thiserror::Error;

use crate::domain::{round_to, Prediction};

/// Confidence strictly above this is a strong signal.
pub const STRONG_CONFIDENCE: f64 = 75.0;
/// Confidence strictly above this (and not strong) is a moderate signal.
pub const MODERATE_CONFIDENCE: f64 = 60.0;

pub const RISK_FACTOR: f64 = 0.7;
pub const REWARD_FACTOR: f64 = 1.5;
/// Ratios strictly above this are reported as favorable.
pub const FAVORABLE_RATIO: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("risk/reward ratio undefined: potential risk is zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Action::Buy => {
                "AI suggests buying based on positive indicators and trend prediction."
            }
            Action::Sell => {
                "AI suggests selling based on negative indicators and trend prediction."
            }
            Action::Hold => "Signal strength is weak. Consider waiting for clearer indicators.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak Signal",
        }
    }

    /// "Strong Signal", "Moderate Signal", "Weak Signal".
    pub fn caption(self) -> String {
        match self {
            Strength::Weak => self.label().to_string(),
            other => format!("{} Signal", other.label()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub action: Action,
    pub strength: Strength,
}

impl Recommendation {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let trend_action = if prediction.direction.is_up() {
            Action::Buy
        } else {
            Action::Sell
        };
        let c = prediction.confidence;
        if c > STRONG_CONFIDENCE {
            Self {
                action: trend_action,
                strength: Strength::Strong,
            }
        } else if c > MODERATE_CONFIDENCE {
            Self {
                action: trend_action,
                strength: Strength::Moderate,
            }
        } else {
            Self {
                action: Action::Hold,
                strength: Strength::Weak,
            }
        }
    }
}

/// `None` until a prediction exists.
pub fn recommendation(prediction: Option<&Prediction>) -> Option<Recommendation> {
    prediction.map(Recommendation::from_prediction)
}

/// Potential risk and reward, in percent, at display precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskReward {
    pub risk: f64,
    pub reward: f64,
}

impl RiskReward {
    pub fn from_change(predicted_change: f64) -> Self {
        let magnitude = predicted_change.abs();
        Self {
            risk: round_to(magnitude * RISK_FACTOR, 2),
            reward: round_to(magnitude * REWARD_FACTOR, 2),
        }
    }

    /// Reward per unit of risk, 2 decimals.
    pub fn ratio(&self) -> Result<f64, DerivationError> {
        if self.risk == 0.0 {
            return Err(DerivationError::DivisionByZero);
        }
        Ok(round_to(self.reward / self.risk, 2))
    }

    /// An undefined ratio is never favorable.
    pub fn is_favorable(&self) -> bool {
        matches!(self.ratio(), Ok(r) if r > FAVORABLE_RATIO)
    }

    /// Ratio as displayed, `1:n/a` when undefined.
    pub fn ratio_label(&self) -> String {
        match self.ratio() {
            Ok(ratio) => format!("1:{ratio:.2}"),
            Err(_) => "1:n/a".to_string(),
        }
    }

    pub fn verdict(&self) -> &'static str {
        if self.is_favorable() {
            "✓ Favorable risk-reward ratio"
        } else {
            "⚠ Consider the risk carefully"
        }
    }
}

pub fn risk_reward(prediction: Option<&Prediction>) -> Option<RiskReward> {
    prediction.map(|p| RiskReward::from_change(p.predicted_change))
}
