//! Input events for the interactive session.
//!
//! Two producers feed the session loop: a blocking task that polls the
//! terminal and forwards translated [`SessionEvent`]s over a channel, and
//! [`shutdown_signal`], which resolves on SIGINT/SIGTERM.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// How long a single terminal poll blocks before the forwarder re-checks
/// whether the session is still listening.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Session-level input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// Enter or a left click
    Reroll,
    /// Ctrl+L
    Redraw,
    /// `q`, Ctrl+C or Ctrl+Z
    Quit,
    Resize,
    /// The terminal reported an error; the session cannot continue.
    DisplayError(String),
}

/// Translate a raw terminal event. Events the session ignores map to `None`.
pub fn translate(event: &Event) -> Option<SessionEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => translate_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(SessionEvent::Reroll),
            _ => None,
        },
        Event::Resize(_, _) => Some(SessionEvent::Resize),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<SessionEvent> {
    debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('z') => Some(SessionEvent::Quit),
            KeyCode::Char('l') => Some(SessionEvent::Redraw),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Enter => Some(SessionEvent::Reroll),
        KeyCode::Char('q') => Some(SessionEvent::Quit),
        _ => None,
    }
}

/// Spawn the input forwarder on the blocking pool.
///
/// The task ends once the receiving side is dropped, or after forwarding a
/// [`SessionEvent::DisplayError`].
pub fn spawn_input_forwarder(tx: UnboundedSender<SessionEvent>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || forward_input(&tx))
}

fn forward_input(tx: &UnboundedSender<SessionEvent>) {
    while !tx.is_closed() {
        let ready = match event::poll(POLL_INTERVAL) {
            Ok(ready) => ready,
            Err(e) => {
                report_display_error(tx, e);
                return;
            }
        };
        if !ready {
            continue;
        }
        match event::read() {
            Ok(raw) => {
                if let Some(event) = translate(&raw)
                    && tx.send(event).is_err()
                {
                    debug!("Session closed, input forwarder stopping");
                    return;
                }
            }
            Err(e) => {
                report_display_error(tx, e);
                return;
            }
        }
    }
    debug!("Input forwarder stopped");
}

fn report_display_error(tx: &UnboundedSender<SessionEvent>, error: std::io::Error) {
    warn!("Terminal input failed: {}", error);
    if tx.send(SessionEvent::DisplayError(error.to_string())).is_err() {
        warn!("Failed to forward display error: receiver dropped");
    }
}

/// Resolves when the process receives an interrupt or terminate signal.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Cannot listen for interrupt signal: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Cannot listen for terminate signal: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => info!("Received interrupt signal"),
        () = terminate => info!("Received terminate signal"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_enter_rerolls() {
        assert_eq!(
            translate(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(SessionEvent::Reroll)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            translate(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(SessionEvent::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Quit)
        );
    }

    #[test]
    fn test_ctrl_l_redraws() {
        assert_eq!(
            translate(&key(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            Some(SessionEvent::Redraw)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(translate(&key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(translate(&key(KeyCode::Char('l'), KeyModifiers::NONE)), None);
        assert_eq!(translate(&key(KeyCode::Char('q'), KeyModifiers::CONTROL)), None);
        assert_eq!(translate(&key(KeyCode::Esc, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(translate(&Event::Key(release)), None);
    }

    #[test]
    fn test_left_click_rerolls() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(SessionEvent::Reroll)
        );
        assert_eq!(translate(&mouse(MouseEventKind::Down(MouseButton::Right))), None);
        assert_eq!(translate(&mouse(MouseEventKind::Moved)), None);
        assert_eq!(translate(&mouse(MouseEventKind::ScrollUp)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(&Event::Resize(80, 24)), Some(SessionEvent::Resize));
        assert_eq!(translate(&Event::FocusGained), None);
    }
}
