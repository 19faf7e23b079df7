use std::io::{self, Stdout, Write};

use anyhow::Context;
use colored::*;
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use tracing::debug;

use crate::terminal::{
    colors,
    input::{self, RawModeGuard, SessionInput},
    print,
};
use ipconv_common::{config::Config, info};
use ipconv_common::conversion::FAILURE_MARKER;
use ipconv_core::accumulator::{Accumulator, KeyOutcome};

pub fn interactive(cfg: &Config) -> anyhow::Result<()> {
    print::header("interactive session", cfg.quiet);
    if cfg.quiet < 2 {
        print::print_status(format!(
            "digits and '.' type, {} converts, {} clears, {} quits",
            "Enter".color(colors::ACCENT),
            "C".color(colors::ACCENT),
            "Esc".color(colors::ACCENT)
        ));
    }

    let mut accumulator: Accumulator = Accumulator::new(cfg.mode);
    let mut stdout: Stdout = io::stdout();

    let guard: RawModeGuard = RawModeGuard::enable()?;
    let session = run_session(&mut accumulator, &mut stdout);
    drop(guard);

    // raw mode leaves the cursor at the end of the binary line
    let newline = writeln!(stdout);
    finish_session(session, newline)?;
    info!("session closed");
    Ok(())
}

/// A session error takes precedence over failing to end the last line.
fn finish_session(session: anyhow::Result<()>, newline: io::Result<()>) -> anyhow::Result<()> {
    session?;
    newline.context("failed to write to terminal")
}

fn run_session(accumulator: &mut Accumulator, out: &mut Stdout) -> anyhow::Result<()> {
    draw(accumulator, out, false)?;

    loop {
        match input::read_input()? {
            SessionInput::Quit => return Ok(()),
            SessionInput::ClearButton => {
                if !accumulator.clear() {
                    continue;
                }
            }
            SessionInput::Key(raw) => match accumulator.handle_key(raw) {
                KeyOutcome::Ignored => continue,
                KeyOutcome::Updated => {}
                KeyOutcome::Committed(result) => debug!(%result, "address committed"),
            },
        }

        draw(accumulator, out, true)?;
    }
}

/// Draws the two display lines, overwriting the previous pair when `redraw` is set.
fn draw(accumulator: &Accumulator, out: &mut Stdout, redraw: bool) -> anyhow::Result<()> {
    if redraw {
        queue!(out, cursor::MoveToPreviousLine(1))?;
    } else {
        queue!(out, cursor::MoveToColumn(0))?;
    }

    queue!(
        out,
        Clear(ClearType::CurrentLine),
        Print(address_line(accumulator)),
        Print("\r\n"),
        Clear(ClearType::CurrentLine),
        Print(binary_line(accumulator)),
    )?;

    out.flush().context("failed to flush terminal")
}

fn address_line(accumulator: &Accumulator) -> String {
    let value: ColoredString = if accumulator.buffer().is_empty() {
        accumulator.address_text().color(colors::PLACEHOLDER).italic()
    } else {
        accumulator.address_text().color(colors::IPV4_ADDR).bold()
    };
    print::aligned("Address", value)
}

fn binary_line(accumulator: &Accumulator) -> String {
    let text: &str = accumulator.binary_text();
    let value: ColoredString = match text {
        FAILURE_MARKER => text.color(colors::FAILURE).bold(),
        _ => text.color(colors::BINARY),
    };
    print::aligned("Binary", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broken_pipe() -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }

    #[test]
    fn test_finish_session_keeps_session_error() {
        let session = Err(anyhow::anyhow!("failed to read terminal event"));
        let err = finish_session(session, broken_pipe()).unwrap_err();
        assert_eq!(err.to_string(), "failed to read terminal event");
    }

    #[test]
    fn test_finish_session_reports_newline_error() {
        let err = finish_session(Ok(()), broken_pipe()).unwrap_err();
        assert_eq!(err.to_string(), "failed to write to terminal");
    }

    #[test]
    fn test_finish_session_ok() {
        assert!(finish_session(Ok(()), Ok(())).is_ok());
    }
}
