//! Empty and busy views.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use copilot_core::Ticker;

use crate::theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render_empty(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Start Your Analysis", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Enter a stock ticker above to get AI-powered predictions, technical indicators, \
             sentiment analysis, and smart buy/sell recommendations.",
            theme::muted(),
        )),
    ];

    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(para, area);
}

pub fn render_busy(f: &mut Frame, area: Rect, ticker: &Ticker, tick: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent());

    let frame = SPINNER[tick % SPINNER.len()];
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(frame, theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(format!("Analyzing {ticker}..."), theme::bold())),
        Line::from(Span::styled(
            "Processing market data and AI predictions",
            theme::muted(),
        )),
    ];

    let para = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(para, area);
}
