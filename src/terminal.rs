//! Terminal setup and teardown.

use anyhow::{Context, Result};
use crossterm::{
    cursor, style,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use std::io::{self, Stdout, Write};

/// Rows taken by the status and message lines.
const RESERVED_ROWS: usize = 2;

/// RAII guard for terminal state: raw mode and the alternate screen are restored on drop, even
/// when the editor exits with an error.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new(stdout: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("enable_raw_mode failed")?;
        stdout.execute(terminal::EnterAlternateScreen)?;
        stdout.execute(cursor::Hide)?;
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(style::ResetColor);
        let _ = stdout.execute(cursor::Show);
        let _ = stdout.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
    }
}

/// Text area of the terminal as `(rows, cols)`, leaving room for the status and message lines.
pub fn window_size() -> Result<(usize, usize)> {
    let (w, h) = terminal::size().context("querying terminal size")?;
    Ok((
        usize::from(h).saturating_sub(RESERVED_ROWS).max(1),
        usize::from(w).max(1),
    ))
}
