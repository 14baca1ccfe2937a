//! Bottom status bar — key hints, last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let hints = match app.focus {
        Focus::Search => " Enter:analyze Tab:quick select F1:help F2:errors Esc:quit",
        Focus::QuickSelect => " ←/→:move 1-9/Enter:select Tab:search ?:help e:errors q:quit",
    };
    let mut spans = vec![Span::styled(hints, theme::muted())];

    if !app.error_history.is_empty() {
        spans.push(Span::styled(
            format!(" [{} err]", app.error_history.len()),
            theme::negative(),
        ));
    }

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
