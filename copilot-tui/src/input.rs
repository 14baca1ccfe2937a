//! Keyboard input dispatch — global keys → overlays → focused widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus, Overlay};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Global keys (always available).
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.running = false;
        return;
    }
    match key.code {
        KeyCode::F(1) => {
            app.overlay = toggle(app.overlay, Overlay::Help);
            return;
        }
        KeyCode::F(2) => {
            app.overlay = toggle(app.overlay, Overlay::ErrorHistory);
            app.error_scroll = 0;
            return;
        }
        _ => {}
    }

    // 2. Overlays consume input next.
    match app.overlay {
        Overlay::Help => {
            handle_help_overlay(app, key);
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 3. Focused widget.
    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::QuickSelect => handle_quick_select_key(app, key),
    }
}

fn toggle(current: Overlay, target: Overlay) -> Overlay {
    if current == target {
        Overlay::None
    } else {
        target
    }
}

fn handle_help_overlay(app: &mut AppState, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?')) {
        app.overlay = Overlay::None;
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Tab | KeyCode::Down => app.focus = Focus::QuickSelect,
        KeyCode::Esc => {
            if app.search_input.is_empty() {
                app.running = false;
            } else {
                app.search_input.clear();
            }
        }
        KeyCode::Char(c) => app.push_input_char(c),
        _ => {}
    }
}

fn handle_quick_select_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_quick_cursor(-1),
        KeyCode::Right | KeyCode::Char('l') => app.move_quick_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_quick(app.quick_cursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.select_quick(index);
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Esc => app.focus = Focus::Search,
        KeyCode::Char('?') => app.overlay = Overlay::Help,
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
        }
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}
