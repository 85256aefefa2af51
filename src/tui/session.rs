//! # Interactive Session
//!
//! ```text
//! Initializing ──► Running ──► Terminating
//!                   │   ▲
//!                   └───┘  Reroll / Redraw / Resize
//! ```
//!
//! A [`Session`] owns the terminal for its whole life and rolls once on
//! creation. [`run_loop`] draws, then waits on whichever comes first: the
//! next input event or the shutdown signal. Quit, a closed input channel, or
//! the signal all end the loop normally; a display error ends it with
//! [`TuiError::Display`].

use std::future::Future;

use log::{debug, info, warn};
use rand::TryCryptoRng;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::{RenderVariant, Roller};
use crate::tui::TuiError;
use crate::tui::event::SessionEvent;
use crate::tui::ui;

/// What the loop does after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<B: Backend, R> {
    terminal: Terminal<B>,
    roller: Roller<R>,
    variant: RenderVariant,
    rendering: String,
}

impl<B: Backend, R: TryCryptoRng> Session<B, R> {
    /// Takes ownership of the terminal and performs the first roll.
    pub fn new(
        terminal: Terminal<B>,
        roller: Roller<R>,
        variant: RenderVariant,
    ) -> Result<Self, TuiError> {
        let mut session = Self {
            terminal,
            roller,
            variant,
            rendering: String::new(),
        };
        session.reroll()?;
        Ok(session)
    }

    pub fn rendering(&self) -> &str {
        &self.rendering
    }

    #[cfg(test)]
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub fn reroll(&mut self) -> Result<(), TuiError> {
        let rolls = self.roller.roll_set()?;
        self.rendering = self.variant.render(&rolls);
        info!("Rolled {:+}", rolls.total());
        Ok(())
    }

    /// Draw the hint line and current rendering, then flush.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let rendering = &self.rendering;
        self.terminal
            .draw(|frame| ui::draw_screen(frame, rendering))
            .map_err(|e| TuiError::Draw(e.to_string()))?;
        Ok(())
    }

    /// Throw away the terminal's idea of what is on screen so the next draw
    /// repaints every cell.
    pub fn resync(&mut self) -> Result<(), TuiError> {
        self.terminal
            .clear()
            .map_err(|e| TuiError::Draw(e.to_string()))
    }

    pub fn handle(&mut self, event: SessionEvent) -> Result<Flow, TuiError> {
        match event {
            SessionEvent::Reroll => self.reroll()?,
            SessionEvent::Redraw => self.resync()?,
            SessionEvent::Resize => {}
            SessionEvent::Quit => return Ok(Flow::Quit),
            SessionEvent::DisplayError(message) => {
                warn!("Display error: {}", message);
                return Err(TuiError::Display(message));
            }
        }
        Ok(Flow::Continue)
    }
}

/// Run the session until quit, signal, or a display error.
///
/// `events` is consumed so the input forwarder sees the channel close as
/// soon as the loop returns.
pub async fn run_loop<B, R, S>(
    session: &mut Session<B, R>,
    mut events: UnboundedReceiver<SessionEvent>,
    shutdown: S,
) -> Result<(), TuiError>
where
    B: Backend,
    R: TryCryptoRng,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        session.draw()?;

        let event = tokio::select! {
            event = events.recv() => event,
            () = &mut shutdown => {
                info!("Shutdown signal, leaving session");
                return Ok(());
            }
        };

        let Some(event) = event else {
            info!("Input channel closed, leaving session");
            return Ok(());
        };

        debug!("Session event: {:?}", event);
        if session.handle(event)? == Flow::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}
