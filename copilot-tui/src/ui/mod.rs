//! Top-level UI layout — header, search bar, main view, footer, status bar.

pub mod cards;
pub mod overlays;
pub mod search_bar;
pub mod states;
pub mod status_bar;

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use copilot_core::View;

use crate::app::{AppState, Overlay};
use crate::theme;

const DISCLAIMER: &str = "⚠ Educational purposes only. Not financial advice. \
                          Always consult with a financial advisor before making investment decisions.";

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header
            Constraint::Length(5), // search + quick select
            Constraint::Min(8),    // empty / busy / results
            Constraint::Length(1), // disclaimer
            Constraint::Length(1), // status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    search_bar::render(f, chunks[1], app);

    // Busy takes precedence, then empty, then results.
    match app.dashboard.view() {
        View::Busy { ticker } => states::render_busy(f, chunks[2], ticker, app.spinner_tick),
        View::Empty => states::render_empty(f, chunks[2]),
        View::Results { ticker, report } => cards::render(f, chunks[2], ticker, report),
    }

    let footer = Paragraph::new(Span::styled(DISCLAIMER, theme::muted()))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[3]);

    status_bar::render(f, chunks[4], app);

    match app.overlay {
        Overlay::Help => overlays::render_help(f, chunks[2]),
        Overlay::ErrorHistory => overlays::render_error_history(f, chunks[2], app),
        Overlay::None => {}
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("AI ML · Trading Co-Pilot", theme::accent_bold())),
        Line::from(Span::styled(
            "AI Co-Pilot for Smarter, Stress-Free Investing",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
