//! Property tests for the derived signals.
//!
//! 1. Recommendation partition — strength/action depend only on confidence bands
//! 2. Risk/reward — magnitudes scale with |change| and ignore its sign
//! 3. Ratio — defined whenever risk is non-zero, and close to 1.5 / 0.7

use copilot_core::advice::{FAVORABLE_RATIO, REWARD_FACTOR, RISK_FACTOR};
use copilot_core::{
    Action, DerivationError, Direction, Prediction, Recommendation, RiskReward, Strength,
};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

fn prediction(direction: Direction, confidence: f64, change: f64) -> Prediction {
    Prediction {
        direction,
        confidence,
        predicted_change: change,
        timeframe: "24 hours".into(),
    }
}

// ── 1. Recommendation partition ──────────────────────────────────────

proptest! {
    #[test]
    fn strong_above_75(direction in arb_direction(), c in 75.0001..100.0_f64) {
        let r = Recommendation::from_prediction(&prediction(direction, c, 1.0));
        prop_assert_eq!(r.strength, Strength::Strong);
        let expected = if direction == Direction::Up { Action::Buy } else { Action::Sell };
        prop_assert_eq!(r.action, expected);
    }

    #[test]
    fn moderate_between_60_and_75(direction in arb_direction(), c in 60.0001..=75.0_f64) {
        let r = Recommendation::from_prediction(&prediction(direction, c, 1.0));
        prop_assert_eq!(r.strength, Strength::Moderate);
        prop_assert_ne!(r.action, Action::Hold);
    }

    #[test]
    fn hold_at_or_below_60(direction in arb_direction(), c in 0.0..=60.0_f64) {
        let r = Recommendation::from_prediction(&prediction(direction, c, 1.0));
        prop_assert_eq!(r.action, Action::Hold);
        prop_assert_eq!(r.strength, Strength::Weak);
    }

    /// The predicted change never influences the recommendation.
    #[test]
    fn recommendation_ignores_change(
        direction in arb_direction(),
        c in 0.0..100.0_f64,
        a in -5.0..5.0_f64,
        b in -5.0..5.0_f64,
    ) {
        prop_assert_eq!(
            Recommendation::from_prediction(&prediction(direction, c, a)),
            Recommendation::from_prediction(&prediction(direction, c, b))
        );
    }
}

// ── 2. Risk/reward magnitudes ────────────────────────────────────────

proptest! {
    #[test]
    fn sign_does_not_matter(change in 0.0..10.0_f64) {
        prop_assert_eq!(RiskReward::from_change(change), RiskReward::from_change(-change));
    }

    #[test]
    fn factors_within_rounding(change in -2.0..4.0_f64) {
        let rr = RiskReward::from_change(change);
        prop_assert!((rr.risk - change.abs() * RISK_FACTOR).abs() <= 0.005 + 1e-9);
        prop_assert!((rr.reward - change.abs() * REWARD_FACTOR).abs() <= 0.005 + 1e-9);
        prop_assert!(rr.reward >= rr.risk);
    }
}

// ── 3. Ratio ─────────────────────────────────────────────────────────

proptest! {
    /// Above one percent of movement, rounding cannot drag the ratio far from 1.5/0.7.
    #[test]
    fn ratio_near_constant_for_real_moves(change in 1.0..4.0_f64) {
        let ratio = RiskReward::from_change(change).ratio().unwrap();
        prop_assert!((ratio - REWARD_FACTOR / RISK_FACTOR).abs() < 0.05);
        prop_assert!(ratio > FAVORABLE_RATIO);
    }

    #[test]
    fn ratio_defined_iff_risk_nonzero(change in -0.05..0.05_f64) {
        let rr = RiskReward::from_change(change);
        match rr.ratio() {
            Ok(_) => {
                prop_assert!(rr.risk > 0.0);
            }
            Err(DerivationError::DivisionByZero) => {
                prop_assert_eq!(rr.risk, 0.0);
            }
        }
    }
}

#[test]
fn zero_change_has_undefined_ratio() {
    let rr = RiskReward::from_change(0.0);
    assert_eq!((rr.risk, rr.reward), (0.0, 0.0));
    assert_eq!(rr.ratio(), Err(DerivationError::DivisionByZero));
}
