//! GeoPeek - Main entry point
//!
//! A three-step terminal wizard: pick an information category, pick a
//! geographic asset, and read what the Swiss geoportal knows about it.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use tracing::{debug, info};

use geopeek::app::App;
use geopeek::cli::Cli;

/// Initialize the logger with appropriate settings
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    // Initialize logging first
    init_logging();
    info!("GeoPeek starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    // Build the app before touching the terminal so a construction
    // failure never leaves raw mode enabled
    let mut app = App::new(cli.assets).context("failed to start the application")?;

    enable_raw_mode().context("failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result.map_err(Into::into)
}
