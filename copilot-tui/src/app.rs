//! Application state — single-owner, main-thread only.
//!
//! The dashboard view-model lives here next to the UI-only state (search
//! buffer, focus, overlays, status line). The worker thread communicates via
//! channels.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use copilot_core::{Dashboard, Ticker, TriggerError};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Longest search buffer the input field accepts.
pub const MAX_INPUT_LEN: usize = 16;
const ERROR_HISTORY_CAP: usize = 50;

/// Which input widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    QuickSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Provider,
    Input,
    Worker,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Provider => "PROV",
            ErrorCategory::Input => "INPUT",
            ErrorCategory::Worker => "WORK",
        }
    }
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,

    pub dashboard: Dashboard,

    // Input capture
    pub search_input: String,
    pub focus: Focus,
    pub quick_select: Vec<Ticker>,
    pub quick_cursor: usize,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
    pub spinner_tick: usize,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        quick_select: Vec<Ticker>,
    ) -> Self {
        Self {
            running: true,
            dashboard: Dashboard::new(),
            search_input: String::new(),
            focus: Focus::Search,
            quick_select,
            quick_cursor: 0,
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(ERROR_HISTORY_CAP),
            error_scroll: 0,
            overlay: Overlay::None,
            spinner_tick: 0,
        }
    }

    /// Analyze whatever is in the search field (Enter / "Analyze").
    pub fn submit_search(&mut self) {
        let raw = self.search_input.clone();
        self.trigger(&raw);
    }

    /// Quick-select: same path as typing the symbol and submitting.
    pub fn select_quick(&mut self, index: usize) {
        let Some(ticker) = self.quick_select.get(index).cloned() else {
            return;
        };
        self.quick_cursor = index;
        if self.trigger(ticker.as_str()) {
            self.search_input = ticker.to_string();
        }
    }

    /// Start an analysis cycle. Returns true if the dashboard went busy.
    pub fn trigger(&mut self, raw: &str) -> bool {
        match self.dashboard.begin_analysis(raw) {
            Ok(request) => {
                tracing::info!(ticker = %request.ticker, request_id = request.request_id, "trigger");
                let status = format!("Analyzing {}...", request.ticker);
                let command = WorkerCommand::Analyze {
                    request_id: request.request_id,
                    ticker: request.ticker,
                };
                if self.worker_tx.send(command).is_err() {
                    self.dashboard.abandon(request.request_id);
                    tracing::error!(request_id = request.request_id, "worker channel closed");
                    self.push_error(
                        ErrorCategory::Worker,
                        "analysis worker is not running".into(),
                        raw.to_string(),
                    );
                    return false;
                }
                self.set_status(status);
                true
            }
            Err(TriggerError::EmptyInput) => false,
            Err(err @ TriggerError::Busy { .. }) => {
                self.set_warning(err.to_string());
                false
            }
            Err(err) => {
                tracing::debug!(input = raw, error = %err, "trigger rejected");
                self.set_warning(err.to_string());
                false
            }
        }
    }

    /// Drain worker responses (non-blocking).
    pub fn drain_worker(&mut self) {
        while let Ok(resp) = self.worker_rx.try_recv() {
            self.handle_worker_response(resp);
        }
    }

    pub fn handle_worker_response(&mut self, resp: WorkerResponse) {
        match resp {
            WorkerResponse::AnalysisComplete { request_id, report } => {
                let ticker = report.ticker.clone();
                let failures: Vec<(String, String)> = report
                    .failures()
                    .into_iter()
                    .map(|(card, err)| (card.title().to_string(), err.to_string()))
                    .collect();

                if !self.dashboard.complete(request_id, *report) {
                    return;
                }
                for (card, message) in &failures {
                    self.push_error(
                        ErrorCategory::Provider,
                        message.clone(),
                        format!("{ticker} · {card}"),
                    );
                }
                match failures.len() {
                    0 => self.set_status(format!("Analysis complete: {ticker}")),
                    n => self.set_warning(format!("{ticker}: {n} of 4 cards unavailable")),
                }
            }
        }
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.dashboard.is_busy() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn push_input_char(&mut self, c: char) {
        if c.is_control() || self.search_input.chars().count() >= MAX_INPUT_LEN {
            return;
        }
        self.search_input.extend(c.to_uppercase());
    }

    /// The Analyze action is disabled with an empty field or while busy.
    pub fn can_submit(&self) -> bool {
        !self.search_input.trim().is_empty() && !self.dashboard.is_busy()
    }

    pub fn move_quick_cursor(&mut self, delta: isize) {
        let len = self.quick_select.len();
        if len == 0 {
            return;
        }
        let next = (self.quick_cursor as isize + delta).rem_euclid(len as isize);
        self.quick_cursor = next as usize;
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > ERROR_HISTORY_CAP {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::{
        AnalysisReport, Analyzer, BacktestPeriod, CopilotConfig, SimulatedMarket, View,
    };
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    fn app() -> (AppState, Receiver<WorkerCommand>, Sender<WorkerResponse>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let quick = CopilotConfig::default().quick_select();
        (AppState::new(cmd_tx, resp_rx, quick), cmd_rx, resp_tx)
    }

    fn report_for(ticker: &Ticker) -> AnalysisReport {
        Analyzer::simulated(
            Arc::new(SimulatedMarket::new(Duration::ZERO).with_seed(1)),
            BacktestPeriod::default(),
        )
        .analyze(ticker)
    }

    #[test]
    fn typing_upper_cases() {
        let (mut app, _, _) = app();
        for c in "tsla".chars() {
            app.push_input_char(c);
        }
        assert_eq!(app.search_input, "TSLA");
    }

    #[test]
    fn input_is_capped() {
        let (mut app, _, _) = app();
        for _ in 0..40 {
            app.push_input_char('a');
        }
        assert_eq!(app.search_input.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn empty_submit_sends_nothing() {
        let (mut app, cmd_rx, _) = app();
        app.submit_search();
        assert!(cmd_rx.try_recv().is_err());
        assert!(matches!(app.dashboard.view(), View::Empty));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn invalid_submit_warns_without_state_change() {
        let (mut app, cmd_rx, _) = app();
        app.search_input = "A$B".into();
        app.submit_search();
        assert!(cmd_rx.try_recv().is_err());
        assert!(matches!(app.dashboard.view(), View::Empty));
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn submit_sends_analyze_command() {
        let (mut app, cmd_rx, _) = app();
        app.search_input = "AAPL".into();
        app.submit_search();
        match cmd_rx.try_recv().unwrap() {
            WorkerCommand::Analyze { ticker, .. } => assert_eq!(ticker.as_str(), "AAPL"),
            other => panic!("unexpected command {other:?}"),
        }
        assert!(app.dashboard.is_busy());
        assert!(!app.can_submit());
    }

    #[test]
    fn quick_select_fills_search_and_triggers() {
        let (mut app, cmd_rx, _) = app();
        let idx = app
            .quick_select
            .iter()
            .position(|t| t.as_str() == "TSLA")
            .unwrap();
        app.select_quick(idx);
        assert_eq!(app.search_input, "TSLA");
        assert_eq!(app.quick_cursor, idx);
        assert!(matches!(cmd_rx.try_recv().unwrap(), WorkerCommand::Analyze { .. }));
    }

    #[test]
    fn quick_select_while_busy_is_rejected() {
        let (mut app, cmd_rx, _) = app();
        app.select_quick(0);
        let _ = cmd_rx.try_recv().unwrap();
        app.select_quick(1);
        assert!(cmd_rx.try_recv().is_err());
        assert_eq!(app.search_input, app.quick_select[0].as_str());
        assert_eq!(app.dashboard.ticker(), Some(&app.quick_select[0]));
    }

    #[test]
    fn completion_moves_to_results() {
        let (mut app, cmd_rx, resp_tx) = app();
        app.search_input = "MSFT".into();
        app.submit_search();
        let WorkerCommand::Analyze { request_id, ticker } = cmd_rx.try_recv().unwrap() else {
            panic!("expected analyze command");
        };
        resp_tx
            .send(WorkerResponse::AnalysisComplete {
                request_id,
                report: Box::new(report_for(&ticker)),
            })
            .unwrap();
        app.drain_worker();
        assert!(matches!(app.dashboard.view(), View::Results { .. }));
        assert!(matches!(app.status_message, Some((_, StatusLevel::Info))));
    }

    #[test]
    fn provider_failures_reach_error_history() {
        let (mut app, cmd_rx, _) = app();
        app.search_input = "ZZZZ".into();
        app.submit_search();
        let WorkerCommand::Analyze { request_id, ticker } = cmd_rx.try_recv().unwrap() else {
            panic!("expected analyze command");
        };
        let report = Analyzer::simulated(
            Arc::new(
                SimulatedMarket::new(Duration::ZERO)
                    .with_seed(1)
                    .with_unknown_symbols(["ZZZZ"]),
            ),
            BacktestPeriod::default(),
        )
        .analyze(&ticker);
        app.handle_worker_response(WorkerResponse::AnalysisComplete {
            request_id,
            report: Box::new(report),
        });
        assert_eq!(app.error_history.len(), 4);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }

    #[test]
    fn error_history_caps_at_50() {
        let (mut app, _, _) = app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Provider, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn quick_cursor_wraps() {
        let (mut app, _, _) = app();
        let len = app.quick_select.len();
        app.move_quick_cursor(-1);
        assert_eq!(app.quick_cursor, len - 1);
        app.move_quick_cursor(1);
        assert_eq!(app.quick_cursor, 0);
    }

    #[test]
    fn dead_worker_is_reported() {
        let (mut app, cmd_rx, _) = app();
        drop(cmd_rx);
        app.search_input = "AAPL".into();
        app.submit_search();
        assert_eq!(app.error_history.len(), 1);
        assert_eq!(app.error_history[0].category, ErrorCategory::Worker);
        assert!(!app.dashboard.is_busy());
        assert!(matches!(app.dashboard.view(), View::Empty));

        // Re-triggering is not blocked by a phantom busy state.
        app.search_input = "MSFT".into();
        app.submit_search();
        assert!(!app.dashboard.is_busy());
        assert_eq!(app.error_history.len(), 2);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Error))));
    }

    #[test]
    fn dead_worker_keeps_previous_results() {
        let (mut app, cmd_rx, resp_tx) = app();
        app.search_input = "AAPL".into();
        app.submit_search();
        let WorkerCommand::Analyze { request_id, ticker } = cmd_rx.try_recv().unwrap() else {
            panic!("expected analyze command");
        };
        resp_tx
            .send(WorkerResponse::AnalysisComplete {
                request_id,
                report: Box::new(report_for(&ticker)),
            })
            .unwrap();
        app.drain_worker();
        drop(cmd_rx);

        app.select_quick(3);
        assert!(!app.dashboard.is_busy());
        assert_eq!(app.dashboard.ticker().unwrap().as_str(), "AAPL");
        assert!(matches!(app.dashboard.view(), View::Results { .. }));
        assert_eq!(app.search_input, "AAPL");
    }
}
