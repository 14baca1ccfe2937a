//! Results view — stock header plus a 3×2 grid of cards.
//!
//! The four provider cards each show their own record or their own error.
//! Risk-reward and smart alert are derived from the prediction on every draw.

use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use copilot_core::{
    AnalysisReport, BacktestSummary, Card, IndicatorSet, Prediction, ProviderError,
    Recommendation, RiskReward, Sentiment, Ticker,
};

use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, ticker: &Ticker, report: &AnalysisReport) {
    let rows = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(area);

    render_stock_header(f, rows[0], ticker, report.recommendation());

    let top = columns(rows[1]);
    let bottom = columns(rows[2]);

    render_card(f, top[0], Card::Prediction.title(), slot(&report.prediction, prediction_lines));
    render_card(f, top[1], Card::Indicators.title(), slot(&report.indicators, indicator_lines));
    render_card(f, top[2], Card::Sentiment.title(), slot(&report.sentiment, sentiment_lines));
    render_card(f, bottom[0], Card::Backtest.title(), slot(&report.backtest, backtest_lines));
    render_card(f, bottom[1], "Risk-Reward", risk_reward_lines(report.risk_reward()));
    render_card(f, bottom[2], "Smart Alert", smart_alert_lines(report.recommendation()));
}

fn columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area)
}

fn render_stock_header(
    f: &mut Frame,
    area: Rect,
    ticker: &Ticker,
    recommendation: Option<Recommendation>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let halves = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left = vec![
        Line::from(Span::styled(ticker.to_string(), theme::accent_bold())),
        Line::from(Span::styled("Real-time AI Analysis", theme::muted())),
    ];
    f.render_widget(Paragraph::new(left), halves[0]);

    let right = match recommendation {
        Some(rec) => {
            let color = Theme::default().action_color(rec.action);
            let arrow = match rec.action {
                copilot_core::Action::Buy => " ▲",
                copilot_core::Action::Sell => " ▼",
                copilot_core::Action::Hold => "",
            };
            vec![
                Line::from(Span::styled(
                    format!(" {}{arrow} ", rec.action.label()),
                    Style::default()
                        .fg(Theme::default().background)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(rec.strength.caption(), theme::muted())),
            ]
        }
        None => vec![Line::from(Span::styled("No signal", theme::muted()))],
    };
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {title} "))
        .title_style(theme::accent_bold());
    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

fn slot<T>(
    value: &Result<T, ProviderError>,
    lines: fn(&T) -> Vec<Line<'static>>,
) -> Vec<Line<'static>> {
    match value {
        Ok(v) => lines(v),
        Err(e) => error_lines(e),
    }
}

fn error_lines(err: &ProviderError) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Unavailable", theme::negative().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(err.to_string(), theme::negative())),
        Line::from(""),
        Line::from(Span::styled("Press Enter to retry.", theme::muted())),
    ]
}

fn kv(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::muted()),
        Span::styled(value, style.add_modifier(Modifier::BOLD)),
    ])
}

fn prediction_lines(p: &Prediction) -> Vec<Line<'static>> {
    let t = Theme::default();
    vec![
        kv("Direction", p.direction.label().into(), theme::fg(t.direction_color(p.direction))),
        kv("Confidence", format!("{:.1}%", p.confidence), theme::accent()),
        kv(
            "Predicted Change",
            format!("{:.2}%", p.predicted_change),
            theme::fg(t.pnl_color(p.predicted_change)),
        ),
        kv("Timeframe", p.timeframe.clone(), theme::text()),
    ]
}

fn indicator_lines(i: &IndicatorSet) -> Vec<Line<'static>> {
    let t = Theme::default();
    vec![
        kv("MA 20", format!("${:.2}", i.ma20), theme::text()),
        kv("MA 50", format!("${:.2}", i.ma50), theme::text()),
        kv("RSI", format!("{:.1}", i.rsi), theme::warning()),
        kv("Signal", i.signal.label().into(), theme::fg(t.signal_color(i.signal))),
    ]
}

fn sentiment_lines(s: &Sentiment) -> Vec<Line<'static>> {
    let t = Theme::default();
    vec![
        kv("Mood", s.score.label().into(), theme::fg(t.sentiment_color(s.score))),
        kv("Confidence", format!("{}%", s.percentage), theme::text()),
        kv("Headlines Analyzed", s.headline_count.to_string(), theme::text()),
        kv("Updated", s.updated_label.clone(), theme::text()),
    ]
}

fn backtest_lines(b: &BacktestSummary) -> Vec<Line<'static>> {
    let t = Theme::default();
    vec![
        kv(
            "Hypothetical Profit",
            format!("{:.2}%", b.profit_pct),
            theme::fg(t.pnl_color(b.profit_pct)),
        ),
        kv("Total Trades", b.trade_count.to_string(), theme::text()),
        kv("Win Rate", format!("{:.1}%", b.win_rate_pct), theme::accent()),
        kv("Period", b.period.clone(), theme::text()),
    ]
}

fn risk_reward_lines(rr: Option<RiskReward>) -> Vec<Line<'static>> {
    let Some(rr) = rr else {
        return vec![Line::from(Span::styled(
            "Needs a trend prediction.",
            theme::muted(),
        ))];
    };
    let verdict_style = if rr.is_favorable() {
        theme::positive()
    } else {
        theme::warning()
    };
    vec![
        kv("Potential Risk", format!("{:.2}%", rr.risk), theme::negative()),
        kv("Potential Reward", format!("{:.2}%", rr.reward), theme::positive()),
        kv("R/R Ratio", rr.ratio_label(), theme::accent()),
        Line::from(""),
        Line::from(Span::styled(rr.verdict(), verdict_style)),
    ]
}

fn smart_alert_lines(rec: Option<Recommendation>) -> Vec<Line<'static>> {
    let mut lines = match rec {
        Some(rec) => {
            let color = Theme::default().action_color(rec.action);
            vec![
                Line::from(Span::styled(
                    format!("Recommendation: {}", rec.action.label()),
                    theme::fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(rec.action.advice(), theme::text())),
            ]
        }
        None => vec![Line::from(Span::styled(
            "No recommendation without a trend prediction.",
            theme::muted(),
        ))],
    };
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "This is AI-generated guidance for educational purposes. \
         Always do your own research before investing.",
        theme::muted(),
    )));
    lines
}
