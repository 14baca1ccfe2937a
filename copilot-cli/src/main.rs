//! Co-Pilot CLI — headless access to the analyzer.
//!
//! Commands:
//! - `analyze` — run one analysis cycle for a ticker and print the cards
//! - `tickers` — print the quick-select list
//! - `config` — print the effective configuration as TOML

mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use copilot_core::analysis::provider_pool;
use copilot_core::{Analyzer, CopilotConfig, Ticker};

#[derive(Parser)]
#[command(
    name = "copilot",
    about = "Trading Co-Pilot — AI-style stock analysis from the terminal"
)]
struct Cli {
    /// Config file. Defaults to <config_dir>/copilot/config.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one ticker and print the result cards.
    Analyze {
        /// Ticker symbol (case-insensitive, e.g. aapl).
        ticker: String,

        /// Print the report as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Master seed for reproducible numbers.
        #[arg(long)]
        seed: Option<u64>,

        /// Simulated provider latency in milliseconds.
        #[arg(long)]
        latency_ms: Option<u64>,
    },
    /// Print the quick-select tickers.
    Tickers,
    /// Print the effective configuration as TOML.
    Config,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = CopilotConfig::load(cli.config.as_deref()).context("load configuration")?;

    match cli.command {
        Commands::Analyze {
            ticker,
            json,
            seed,
            latency_ms,
        } => run_analyze(config, &ticker, json, seed, latency_ms),
        Commands::Tickers => {
            for ticker in config.quick_select() {
                println!("{ticker}");
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Logs go to stderr so `--json` output stays clean. `RUST_LOG` overrides the
/// default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,copilot_core=info,copilot=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_analyze(
    mut config: CopilotConfig,
    raw: &str,
    json: bool,
    seed: Option<u64>,
    latency_ms: Option<u64>,
) -> Result<()> {
    if let Some(seed) = seed {
        config.simulation.seed = Some(seed);
    }
    if let Some(ms) = latency_ms {
        config.simulation.latency_ms = ms;
    }

    let ticker = Ticker::parse(raw).with_context(|| format!("invalid ticker '{raw}'"))?;
    let analyzer = Analyzer::from_config(&config);
    let pool = provider_pool().context("build provider thread pool")?;

    tracing::info!(%ticker, latency_ms = config.simulation.latency_ms, "analyze");
    let report = pool.install(|| analyzer.analyze(&ticker));

    if json {
        println!("{}", render::render_json(&report)?);
    } else {
        print!("{}", render::render_text(&report));
    }

    if !report.is_complete() {
        for (card, err) in report.failures() {
            eprintln!("{}: {err}", card.title());
        }
        std::process::exit(1);
    }
    Ok(())
}
