//! Background worker thread — every analysis runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! owns a private rayon pool (not the global one) so the four provider calls
//! overlap no matter how many cores the machine has.

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use copilot_core::analysis::provider_pool;
use copilot_core::{AnalysisReport, Analyzer, Ticker};

/// Commands sent from the TUI to the worker.
#[derive(Debug, Clone)]
pub enum WorkerCommand {
    Analyze { request_id: u64, ticker: Ticker },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    AnalysisComplete {
        request_id: u64,
        report: Box<AnalysisReport>,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    analyzer: Arc<Analyzer>,
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("copilot-worker".into())
        .spawn(move || worker_loop(&analyzer, rx, tx))
}

fn worker_loop(analyzer: &Analyzer, rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    let pool = match provider_pool() {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::warn!(error = %e, "provider pool unavailable, using global rayon pool");
            None
        }
    };

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Analyze { request_id, ticker }) => {
                let report = match &pool {
                    Some(pool) => pool.install(|| analyzer.analyze(&ticker)),
                    None => analyzer.analyze(&ticker),
                };
                let response = WorkerResponse::AnalysisComplete {
                    request_id,
                    report: Box::new(report),
                };
                if tx.send(response).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("worker stopped");
}
