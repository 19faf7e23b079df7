use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ipconv_common::key::RawKey;

/// What the interactive session should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionInput {
    Key(RawKey),
    /// Stands in for the clear button of a windowed front-end.
    ClearButton,
    Quit,
}

/// Keeps the terminal in raw mode for as long as it lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Blocks until the next key press the session cares about.
pub fn read_input() -> anyhow::Result<SessionInput> {
    loop {
        let event: Event = event::read().context("failed to read terminal event")?;
        if let Event::Key(key_event) = event {
            if let Some(input) = to_session_input(key_event) {
                return Ok(input);
            }
        }
    }
}

/// Maps a crossterm key event. Releases and repeats are dropped, everything
/// else reaches the accumulator, which does its own filtering.
pub fn to_session_input(key_event: KeyEvent) -> Option<SessionInput> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl: bool = key_event.modifiers.contains(KeyModifiers::CONTROL);

    let input = match key_event.code {
        KeyCode::Esc => SessionInput::Quit,
        KeyCode::Char('c') if ctrl => SessionInput::Quit,
        KeyCode::Char('l') if ctrl => SessionInput::ClearButton,
        KeyCode::Char(_) if ctrl => SessionInput::Key(RawKey::Other),
        KeyCode::Char(c) => SessionInput::Key(RawKey::Char(c)),
        KeyCode::Backspace => SessionInput::Key(RawKey::Backspace),
        KeyCode::Delete => SessionInput::Key(RawKey::Delete),
        KeyCode::Enter => SessionInput::Key(RawKey::Enter),
        _ => SessionInput::Key(RawKey::Other),
    };

    Some(input)
}
