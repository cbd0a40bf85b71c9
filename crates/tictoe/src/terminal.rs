//! Terminal mode setup and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, info, instrument, warn};

/// Puts the terminal in game mode. Restores it on drop.
///
/// Raw mode, the alternate screen and mouse capture are undone on every
/// exit path: normal return, `?` on a later error, or unwinding.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode, then enters the alternate screen with mouse capture.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever succeeded.
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal in game mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }

        if let Err(e) = leave_screen(&mut io::stdout()) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
pub fn leave_screen(writer: &mut impl Write) -> io::Result<()> {
    execute!(writer, LeaveAlternateScreen, DisableMouseCapture, Show)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_restores_screen_and_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(
            text.contains("\x1b[?1049l"),
            "alternate screen left: {text:?}"
        );
        assert!(text.contains("\x1b[?25h"), "cursor shown: {text:?}");
    }

    #[test]
    fn test_leave_screen_runs_after_mouse_capture_writes() {
        let mut out = Vec::new();
        execute!(out, EnableMouseCapture).unwrap();
        let enabled = out.len();
        leave_screen(&mut out).unwrap();

        let restore = String::from_utf8(out[enabled..].to_vec()).unwrap();
        assert!(
            restore.contains("\x1b[?1000l"),
            "mouse capture stopped: {restore:?}"
        );
    }
}
