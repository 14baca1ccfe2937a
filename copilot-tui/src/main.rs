//! Co-Pilot TUI — search a ticker, watch the cards fill in.
//!
//! Configuration comes from `$COPILOT_CONFIG` when set, otherwise from the
//! default config path. Logs go to a file because the terminal is in raw mode.

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use copilot_core::{Analyzer, CopilotConfig};
use copilot_tui::app::AppState;
use copilot_tui::{input, logging, ui, worker};

fn main() -> Result<()> {
    let config_path = std::env::var_os("COPILOT_CONFIG").map(PathBuf::from);
    let config = CopilotConfig::load(config_path.as_deref()).context("load configuration")?;

    let log_path = logging::default_log_path();
    if let Err(e) = logging::init(&log_path) {
        eprintln!("warning: logging disabled ({e})");
    }
    tracing::info!(
        latency_ms = config.simulation.latency_ms,
        seeded = config.simulation.seed.is_some(),
        "starting copilot-tui"
    );

    // Restore the terminal before printing a panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();
    let analyzer = Arc::new(Analyzer::from_config(&config));
    let worker_handle =
        worker::spawn_worker(analyzer, cmd_rx, resp_tx).context("spawn analysis worker")?;

    let mut app = AppState::new(cmd_tx.clone(), resp_rx, config.quick_select());

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    let _ = cmd_tx.send(worker::WorkerCommand::Shutdown);
    if worker_handle.join().is_err() {
        tracing::error!("worker thread panicked");
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("copilot-tui exited");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        app.drain_worker();

        // 50ms poll, ~20 FPS spinner.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }
        app.tick();

        if !app.running {
            break;
        }
    }
    Ok(())
}
