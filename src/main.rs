//! Klondike binary: terminal session and event loop.
//!
//! ```text
//! main() -> TerminalSession::new() -> run(terminal, state)
//!              loop: refresh_win -> draw -> block on key -> apply
//! ```
//!
//! Logs go to `~/.klondike/logs/klondike.log`, never to the terminal.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs::{self, OpenOptions},
    io::{stdout, Stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use klondike::{tui, GameState, KlondikeConfig, Outcome};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, drop logs rather than write over the board.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warnings.push(format!("Failed to create log dir {}: {e}", parent.display()));
                continue;
            }
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!("Failed to open log file {}: {e}", candidate.display()));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(config_dir) = KlondikeConfig::path().as_deref().and_then(|p| p.parent()) {
        candidates.push(config_dir.join("logs").join("klondike.log"));
    }
    candidates.push(PathBuf::from(".klondike").join("logs").join("klondike.log"));

    candidates
}

/// Raw mode plus alternate screen, restored on drop (including unwinds).
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(mut terminal) => {
                let _ = terminal.hide_cursor();
                Ok(Self { terminal })
            }
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, state: &mut GameState) -> Result<()> {
    loop {
        state.refresh_win();
        terminal.draw(|frame| tui::draw(frame, state))?;

        let Some(command) = tui::next_command()? else {
            continue;
        };

        if state.apply(command) == Outcome::Quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = KlondikeConfig::load();
    tracing::info!(?config, "Starting klondike");

    let mut state = GameState::new(&config);
    let mut session = TerminalSession::new()?;
    let result = run(&mut session.terminal, &mut state);
    drop(session);

    if let Err(err) = &result {
        tracing::error!("Session ended with error: {err:?}");
    }
    result
}
