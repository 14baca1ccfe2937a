//! Search field, Analyze button and the quick-select row.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;

const PLACEHOLDER: &str = "Enter stock ticker (e.g., AAPL, GOOGL, TSLA)...";

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(" Search [Enter]analyze [Tab]quick select [F1]help ")
        .title_style(theme::panel_title(focused));

    let mut input = vec![Span::styled("> ", theme::accent())];
    if app.search_input.is_empty() {
        input.push(Span::styled(PLACEHOLDER, theme::muted()));
    } else {
        input.push(Span::styled(app.search_input.clone(), theme::bold()));
    }
    if focused {
        input.push(Span::styled("_", theme::accent()));
    }
    input.push(Span::raw("   "));
    let label = if app.dashboard.is_busy() {
        "[ Analyzing... ]"
    } else {
        "[ Analyze ]"
    };
    let button_style = if app.can_submit() {
        theme::accent_bold()
    } else {
        theme::muted()
    };
    input.push(Span::styled(label, button_style));

    let lines = vec![Line::from(input), Line::from(""), quick_select_line(app)];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn quick_select_line(app: &AppState) -> Line<'static> {
    let active = app.focus == Focus::QuickSelect;
    let mut spans = vec![Span::styled("Quick Select: ", theme::muted())];
    for (i, ticker) in app.quick_select.iter().enumerate() {
        let is_cursor = active && i == app.quick_cursor;
        let is_selected = app.dashboard.ticker() == Some(ticker);
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else if is_selected {
            theme::accent()
        } else {
            theme::text()
        };
        if i < 9 {
            spans.push(Span::styled(format!("{}:", i + 1), theme::muted()));
        }
        spans.push(Span::styled(format!(" {ticker} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
