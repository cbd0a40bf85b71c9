//! tictoe - terminal tic-tac-toe for two players on one keyboard and mouse.

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tictoe::{Cli, Flow, Presenter, TuiConfig, input, terminal::TerminalGuard, ui};
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_tracing(&config)?;

    info!(?config, "Starting tictoe");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run(&mut terminal, Presenter::new(&config));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting");
    res
}

/// Logs go to a file so they never draw over the board.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

/// Reads one event at a time and runs its handler to completion.
#[instrument(skip_all)]
fn run(terminal: &mut Tui, mut presenter: Presenter) -> Result<()> {
    loop {
        if presenter.take_redraw() {
            terminal.draw(|frame| {
                presenter.resize(frame.area());
                ui::draw(frame, &presenter);
            })?;
        }

        let event = event::read()?;
        let Some(command) = input::translate(&event) else {
            continue;
        };
        debug!(?command, "Input");

        match presenter.handle(command) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Err(e) => warn!(error = %e, "Input rejected by engine"),
        }
    }
}
