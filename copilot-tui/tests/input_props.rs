//! Property tests for keyboard handling.

use std::sync::mpsc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use proptest::prelude::*;

use copilot_core::{CopilotConfig, View};
use copilot_tui::app::{AppState, MAX_INPUT_LEN};
use copilot_tui::input::handle_key;
use copilot_tui::worker::{WorkerCommand, WorkerResponse};

fn app() -> (AppState, mpsc::Receiver<WorkerCommand>) {
    // Callers hold the receiver so the worker channel stays open.
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (_resp_tx, resp_rx) = mpsc::channel::<WorkerResponse>();
    (AppState::new(cmd_tx, resp_rx, CopilotConfig::default().quick_select()), cmd_rx)
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

// ── 1. Search buffer ──

proptest! {
    #[test]
    fn search_buffer_is_capped_and_upper(s in "[a-zA-Z0-9.\\-]{0,40}") {
        let (mut app, _cmd_rx) = app();
        for c in s.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        prop_assert!(app.search_input.chars().count() <= MAX_INPUT_LEN);
        prop_assert_eq!(app.search_input.clone(), app.search_input.to_uppercase());
        prop_assert!(app.running);
    }
}

// ── 2. Submission ──

proptest! {
    #[test]
    fn valid_symbols_always_go_busy(s in "[a-z][a-z0-9]{0,9}") {
        let (mut app, _cmd_rx) = app();
        for c in s.chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        match app.dashboard.view() {
            View::Busy { ticker } => {
                prop_assert_eq!(ticker.as_str(), s.to_uppercase());
            }
            other => {
                prop_assert!(false, "expected busy, got {}", other.name());
            }
        }
    }

    #[test]
    fn whitespace_only_never_triggers(n in 0usize..8) {
        let (mut app, _cmd_rx) = app();
        for _ in 0..n {
            press(&mut app, KeyCode::Char(' '));
        }
        press(&mut app, KeyCode::Enter);
        prop_assert!(matches!(app.dashboard.view(), View::Empty));
    }
}
