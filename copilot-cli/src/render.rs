//! Plain-text and JSON rendering of an analysis report.

use std::fmt::Write;

use serde::Serialize;

use copilot_core::{AnalysisReport, Card, ProviderError, Recommendation};

/// JSON document printed by `copilot analyze --json`: the raw report plus the
/// two derived cards.
#[derive(Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub report: &'a AnalysisReport,
    pub recommendation: Option<Recommendation>,
    pub risk_reward: Option<JsonRiskReward>,
}

#[derive(Serialize)]
pub struct JsonRiskReward {
    pub risk: f64,
    pub reward: f64,
    /// `null` when risk is zero.
    pub ratio: Option<f64>,
    pub favorable: bool,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self {
            report,
            recommendation: report.recommendation(),
            risk_reward: report.risk_reward().map(|rr| JsonRiskReward {
                risk: rr.risk,
                reward: rr.reward,
                ratio: rr.ratio().ok(),
                favorable: rr.is_favorable(),
            }),
        }
    }
}

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport::new(report))
}

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_text(&mut out, report);
    out
}

fn write_text(out: &mut String, report: &AnalysisReport) -> std::fmt::Result {
    writeln!(out, "{} · Real-time AI Analysis", report.ticker)?;
    match report.recommendation() {
        Some(rec) => writeln!(out, "Signal: {} ({})", rec.action.label(), rec.strength.caption())?,
        None => writeln!(out, "Signal: none")?,
    }
    writeln!(out)?;

    section(out, Card::Prediction)?;
    match &report.prediction {
        Ok(p) => {
            field(out, "Direction", p.direction.label())?;
            field(out, "Confidence", format!("{:.1}%", p.confidence))?;
            field(out, "Predicted Change", format!("{:.2}%", p.predicted_change))?;
            field(out, "Timeframe", &p.timeframe)?;
        }
        Err(e) => failure(out, e)?,
    }
    writeln!(out)?;

    section(out, Card::Indicators)?;
    match &report.indicators {
        Ok(i) => {
            field(out, "MA 20", format!("${:.2}", i.ma20))?;
            field(out, "MA 50", format!("${:.2}", i.ma50))?;
            field(out, "RSI", format!("{:.1}", i.rsi))?;
            field(out, "Signal", i.signal.label())?;
        }
        Err(e) => failure(out, e)?,
    }
    writeln!(out)?;

    section(out, Card::Sentiment)?;
    match &report.sentiment {
        Ok(s) => {
            field(out, "Mood", s.score.label())?;
            field(out, "Confidence", format!("{}%", s.percentage))?;
            field(out, "Headlines Analyzed", s.headline_count)?;
            field(out, "Updated", &s.updated_label)?;
        }
        Err(e) => failure(out, e)?,
    }
    writeln!(out)?;

    section(out, Card::Backtest)?;
    match &report.backtest {
        Ok(b) => {
            field(out, "Hypothetical Profit", format!("{:.2}%", b.profit_pct))?;
            field(out, "Total Trades", b.trade_count)?;
            field(out, "Win Rate", format!("{:.1}%", b.win_rate_pct))?;
            field(out, "Period", &b.period)?;
        }
        Err(e) => failure(out, e)?,
    }
    writeln!(out)?;

    writeln!(out, "Risk-Reward")?;
    match report.risk_reward() {
        Some(rr) => {
            field(out, "Potential Risk", format!("{:.2}%", rr.risk))?;
            field(out, "Potential Reward", format!("{:.2}%", rr.reward))?;
            field(out, "R/R Ratio", rr.ratio_label())?;
            writeln!(out, "  {}", rr.verdict())?;
        }
        None => writeln!(out, "  needs a trend prediction")?,
    }
    writeln!(out)?;

    writeln!(out, "Smart Alert")?;
    if let Some(rec) = report.recommendation() {
        writeln!(out, "  Recommendation: {}", rec.action.label())?;
        writeln!(out, "  {}", rec.action.advice())?;
    }
    writeln!(
        out,
        "  AI-generated guidance for educational purposes. Not financial advice."
    )?;
    writeln!(out)?;
    writeln!(out, "elapsed: {} ms", report.elapsed_ms)
}

fn section(out: &mut String, card: Card) -> std::fmt::Result {
    writeln!(out, "{}", card.title())
}

fn field(out: &mut String, label: &str, value: impl std::fmt::Display) -> std::fmt::Result {
    writeln!(out, "  {:<20} {}", format!("{label}:"), value)
}

fn failure(out: &mut String, err: &ProviderError) -> std::fmt::Result {
    writeln!(out, "  unavailable: {err}")
}
