//! # TUI Adapter
//!
//! The interactive mode. Takes over the terminal, shows a roll, and re-rolls
//! on Enter or a left click until the user quits or the process is signalled.
//!
//! This is the only module that knows about ratatui, crossterm and process
//! signals. The dice themselves come from [`crate::core`].
//!
//! ## Terminal ownership
//!
//! [`run`] acquires the terminal through a guard, and the guard restores it
//! on every exit path once acquired: quit, signal, display error, or draw
//! failure. If acquisition itself fails, only the modes already switched on
//! are undone. Callers can print errors to stderr as soon as `run` returns.

mod event;
mod session;
mod ui;

use std::error::Error as _;
use std::io::stdout;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::tty::IsTty;
use log::{info, warn};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;

use crate::core::{FateError, RenderVariant, Roller};

pub use event::{SessionEvent, translate};
pub use session::{Flow, Session, run_loop};

#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// The terminal could not be put into full-screen mode.
    #[error("cannot allocate terminal for fated")]
    DisplayInit(#[source] std::io::Error),

    /// The terminal reported an error while the session was running.
    #[error("quitting because of display error: {0}")]
    Display(String),

    #[error("cannot draw to terminal: {0}")]
    Draw(String),

    #[error(transparent)]
    Roll(#[from] FateError),
}

impl TuiError {
    /// Every session error is fatal to the process.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// One-line summary, followed by the source chain when `debug` is set.
    pub fn report(&self, debug: bool) -> String {
        let mut message = format!("error: {self}");
        if debug {
            let mut source = self.source();
            while let Some(cause) = source {
                message.push_str(&format!("\n  caused by: {cause}"));
                source = cause.source();
            }
        }
        message
    }
}

struct TerminalGuard;

impl TerminalGuard {
    /// Raw mode, alternate screen, mouse capture, hidden cursor.
    ///
    /// The guard only exists once every mode is on. A failure part way
    /// undoes just the steps that succeeded, and nothing is written to
    /// stdout unless it is a terminal.
    fn acquire() -> Result<(Self, DefaultTerminal), TuiError> {
        if !stdout().is_tty() {
            return Err(TuiError::DisplayInit(std::io::Error::other(
                "stdout is not a terminal",
            )));
        }

        let terminal = ratatui::try_init().map_err(|e| {
            // try_init may have switched raw mode on before failing.
            let _ = disable_raw_mode();
            TuiError::DisplayInit(e)
        })?;

        if let Err(e) = execute!(stdout(), EnableMouseCapture, Hide) {
            let _ = execute!(stdout(), DisableMouseCapture, Show);
            ratatui::restore();
            return Err(TuiError::DisplayInit(e));
        }

        info!("Terminal acquired (raw mode, alternate screen, mouse capture)");
        Ok((Self, terminal))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Run an interactive session rendering rolls as `variant`.
pub async fn run(variant: RenderVariant) -> Result<(), TuiError> {
    let (_guard, terminal) = TerminalGuard::acquire()?;
    let mut session = Session::new(terminal, Roller::secure(), variant)?;
    info!("Session started ({:?})", variant);

    let (tx, rx) = mpsc::unbounded_channel();
    let forwarder = event::spawn_input_forwarder(tx);

    let result = run_loop(&mut session, rx, event::shutdown_signal()).await;

    // The loop dropped the receiver; wait for the forwarder to notice so it
    // never reads input after the terminal is restored.
    if let Err(e) = forwarder.await {
        warn!("Input forwarder ended abnormally: {}", e);
    }
    info!("Session finished");
    result
}
