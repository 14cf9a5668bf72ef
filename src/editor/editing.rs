//! Editing commands: the cursor-relative operations bound to keys.
//!
//! Each command edits the buffer at the cursor's file position, then moves the cursor so it
//! stays inside the window. Buffer errors here mean a line grew past the width limit, which
//! the caller treats as fatal.

use super::Editor;
use anyhow::Result;

impl Editor {
    /// Insert `byte` at the cursor, creating empty lines if the cursor sits past the last one.
    pub(super) fn insert_char(&mut self, byte: u8) -> Result<()> {
        let row = self.view.file_row();
        while self.buf.line_count() <= row {
            self.buf.insert(self.buf.line_count(), b"")?;
        }
        self.buf.set_char(row, self.view.file_col(), byte)?;
        self.view.advance_col();
        Ok(())
    }

    /// Split the line at the cursor and move to the start of the new line.
    pub(super) fn insert_newline(&mut self) -> Result<()> {
        let row = self.view.file_row();
        if row >= self.buf.line_count() {
            self.buf.insert(self.buf.line_count(), b"")?;
        } else {
            self.buf.split(row, self.view.file_col())?;
        }
        self.view.down_row();
        self.view.line_start();
        Ok(())
    }

    /// Delete the byte left of the cursor; at column 0 join with the previous line.
    pub(super) fn delete_backward(&mut self) -> Result<()> {
        let row = self.view.file_row();
        let col = self.view.file_col();
        if row >= self.buf.line_count() || (row == 0 && col == 0) {
            return Ok(());
        }
        if col == 0 {
            let prev_len = self.buf.line_len(row - 1);
            self.buf.join_with_next(row - 1)?;
            self.view.up_row();
            self.view.scroll_to_col(prev_len);
        } else {
            self.buf.delete_char(row, col - 1)?;
            self.view.retreat_col();
        }
        Ok(())
    }

    /// Delete the byte under the cursor; at end of line join with the next line.
    pub(super) fn delete_forward(&mut self) -> Result<()> {
        let row = self.view.file_row();
        let col = self.view.file_col();
        if col < self.buf.line_len(row) {
            self.buf.delete_char(row, col)?;
        } else if row + 1 < self.buf.line_count() {
            self.buf.join_with_next(row)?;
        }
        Ok(())
    }

    /// Remove the cursor's line entirely.
    pub(super) fn kill_line(&mut self) -> Result<()> {
        let row = self.view.file_row();
        if row >= self.buf.line_count() {
            return Ok(());
        }
        self.buf.delete(row)?;
        if row >= self.buf.line_count() && row > 0 {
            self.view.up_row();
        }
        self.view.point_fix(&self.buf);
        Ok(())
    }
}
