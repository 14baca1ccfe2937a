//! Dashboard view-model — the only state machine in the system.
//!
//! ```text
//!   Empty ──begin──▶ Busy ──complete──▶ Ready
//!     ▲               │  ▲                   │
//!     └───abandon─────┘  └──────begin────────┘
//! ```
//!
//! A completed analysis never goes back to `Empty`. `abandon` undoes a
//! trigger whose request could not be dispatched, restoring the previous
//! results if there were any. Rejected triggers (blank input, invalid
//! symbol, already busy) leave the phase untouched.

use thiserror::Error;

use crate::advice::{Recommendation, RiskReward};
use crate::analysis::AnalysisReport;
use crate::ticker::{Ticker, TickerError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("no ticker entered")]
    EmptyInput,

    #[error(transparent)]
    InvalidSymbol(TickerError),

    #[error("already analyzing {ticker}")]
    Busy { ticker: Ticker },
}

impl From<TickerError> for TriggerError {
    fn from(err: TickerError) -> Self {
        match err {
            TickerError::Empty => TriggerError::EmptyInput,
            other => TriggerError::InvalidSymbol(other),
        }
    }
}

/// Work order handed to whoever runs the analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub request_id: u64,
    pub ticker: Ticker,
}

#[derive(Debug, Clone)]
enum Phase {
    Empty,
    Busy {
        ticker: Ticker,
        request_id: u64,
        /// Results on screen before this request, restored by `abandon`.
        previous: Option<Box<(Ticker, AnalysisReport)>>,
    },
    Ready { ticker: Ticker, report: AnalysisReport },
}

/// What the render layer should draw.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    Empty,
    Busy { ticker: &'a Ticker },
    Results { ticker: &'a Ticker, report: &'a AnalysisReport },
}

impl View<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            View::Empty => "empty",
            View::Busy { .. } => "busy",
            View::Results { .. } => "results",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    phase: Phase,
    next_request_id: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            next_request_id: 1,
        }
    }

    /// Validate `raw` and enter the busy state.
    ///
    /// Typed input and quick-select both come through here.
    pub fn begin_analysis(&mut self, raw: &str) -> Result<AnalysisRequest, TriggerError> {
        if let Phase::Busy { ticker, .. } = &self.phase {
            return Err(TriggerError::Busy {
                ticker: ticker.clone(),
            });
        }
        let ticker = Ticker::parse(raw)?;
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        let previous = match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Ready { ticker, report } => Some(Box::new((ticker, report))),
            _ => None,
        };
        self.phase = Phase::Busy {
            ticker: ticker.clone(),
            request_id,
            previous,
        };
        tracing::debug!(%ticker, request_id, "dashboard busy");
        Ok(AnalysisRequest { request_id, ticker })
    }

    /// Install a finished report. Returns false (and changes nothing) if the
    /// report does not answer the in-flight request.
    pub fn complete(&mut self, request_id: u64, report: AnalysisReport) -> bool {
        match &self.phase {
            Phase::Busy {
                ticker,
                request_id: pending,
                ..
            } if *pending == request_id => {
                let ticker = ticker.clone();
                self.phase = Phase::Ready { ticker, report };
                true
            }
            _ => {
                tracing::debug!(request_id, "discarding stale analysis report");
                false
            }
        }
    }

    /// Give up on the in-flight request (its runner never received it) and
    /// return to whatever was shown before: the last results, or empty.
    /// Returns false if `request_id` is not the pending request.
    pub fn abandon(&mut self, request_id: u64) -> bool {
        match &self.phase {
            Phase::Busy {
                request_id: pending,
                ..
            } if *pending == request_id => {}
            _ => return false,
        }
        let restored = match std::mem::replace(&mut self.phase, Phase::Empty) {
            Phase::Busy {
                previous: Some(previous),
                ..
            } => {
                let (ticker, report) = *previous;
                Phase::Ready { ticker, report }
            }
            _ => Phase::Empty,
        };
        self.phase = restored;
        tracing::debug!(request_id, "analysis request abandoned");
        true
    }

    /// Busy wins; otherwise no selection means empty; otherwise results.
    pub fn view(&self) -> View<'_> {
        match &self.phase {
            Phase::Busy { ticker, .. } => View::Busy { ticker },
            Phase::Empty => View::Empty,
            Phase::Ready { ticker, report } => View::Results { ticker, report },
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Busy { .. })
    }

    /// Most recently selected ticker.
    pub fn ticker(&self) -> Option<&Ticker> {
        match &self.phase {
            Phase::Empty => None,
            Phase::Busy { ticker, .. } | Phase::Ready { ticker, .. } => Some(ticker),
        }
    }

    pub fn pending_request(&self) -> Option<u64> {
        match &self.phase {
            Phase::Busy { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    /// The visible report; `None` while busy.
    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.phase {
            Phase::Ready { report, .. } => Some(report),
            _ => None,
        }
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        self.report().and_then(AnalysisReport::recommendation)
    }

    pub fn risk_reward(&self) -> Option<RiskReward> {
        self.report().and_then(AnalysisReport::risk_reward)
    }
}
