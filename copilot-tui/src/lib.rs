//! Co-Pilot TUI — terminal front end for the stock-analysis dashboard.
//!
//! - Search field with a quick-select row of popular tickers
//! - Loading view while the worker gathers the four provider results
//! - Six result cards: prediction, indicators, sentiment, backtest,
//!   risk-reward and the smart alert
//! - Help and error-history overlays

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod worker;

pub use app::AppState;
pub use theme::Theme;
