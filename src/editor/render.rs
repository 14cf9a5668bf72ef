//! Rendering: hands the composed frame to the terminal.

use super::Editor;
use crate::compositor;
use crate::types::StatusMsg;
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Instant;

impl Editor {
    /// Draw the whole screen with a single write, if anything changed since the last frame.
    pub fn render(&mut self, out: &mut impl Write) -> Result<()> {
        if !self.needs_redraw {
            return Ok(());
        }
        self.needs_redraw = false;

        let now = Instant::now();
        // An open prompt replaces the message and never expires.
        let prompt_line = self.prompt.as_ref().map(|p| StatusMsg {
            text: p.text(),
            at: now,
        });
        let message = prompt_line.as_ref().or(self.message.as_ref());

        let frame = compositor::compose(&self.buf, &self.view, message, now, self.message_timeout)
            .context("composing frame")?;
        out.write_all(&frame)?;
        out.flush()?;
        Ok(())
    }
}
