//! The window onto the file: scroll offset, cursor point and cursor movement.
//!
//! The cursor's file position is always `offset + point`. `point` stays inside the window
//! (`point.row < rows`, `point.col < cols`); moving past an edge scrolls `offset` instead.

use crate::buffer::Buffer;
use crate::types::Point;
use crate::utils::render_col;

#[derive(Clone, Debug)]
pub struct ViewPort {
    /// Text rows in the window (the status and message lines are not included).
    pub rows: usize,
    pub cols: usize,
    /// Top-left corner of the window inside the file.
    pub offset: Point,
    /// Cursor position relative to the window.
    pub point: Point,
}

impl ViewPort {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            offset: Point::default(),
            point: Point::default(),
        }
    }

    pub fn file_row(&self) -> usize {
        self.offset.row + self.point.row
    }

    pub fn file_col(&self) -> usize {
        self.offset.col + self.point.col
    }

    /// Put the cursor back at the top of the file.
    pub fn reset(&mut self) {
        self.offset = Point::default();
        self.point = Point::default();
    }

    /// Adopt a new window size, scrolling so the cursor keeps its file position.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
        if self.point.row >= self.rows {
            let excess = self.point.row - (self.rows - 1);
            self.offset.row += excess;
            self.point.row -= excess;
        }
        if self.point.col >= self.cols {
            let excess = self.point.col - (self.cols - 1);
            self.offset.col += excess;
            self.point.col -= excess;
        }
    }

    /// Jump to file position (`row`, `col`), placing `row` at the top of the window.
    pub fn jump_to(&mut self, row: usize, col: usize) {
        self.offset = Point::new(row, 0);
        self.point = Point::default();
        self.scroll_to_col(col);
    }

    /// Screen column of the cursor: the rendered (tab-expanded) column of the cursor minus the
    /// horizontal scroll, which is where the compositor draws that byte.
    pub fn screen_col(&self, buf: &Buffer) -> usize {
        let Some(line) = buf.line(self.file_row()) else {
            return self.point.col;
        };
        render_col(line.raw(), self.file_col())
            .saturating_sub(self.offset.col)
            .min(self.cols - 1)
    }

    /// Pull the cursor back if it sits past the end of its line, scrolling left when the
    /// correction is larger than `point.col`.
    pub fn point_fix(&mut self, buf: &Buffer) {
        let len = buf.line_len(self.file_row());
        let col = self.file_col();
        if col > len {
            let excess = col - len;
            if excess <= self.point.col {
                self.point.col -= excess;
            } else {
                self.offset.col -= excess - self.point.col;
                self.point.col = 0;
            }
        }
    }

    /// Put the cursor on file column `col` of the current row, scrolling horizontally only as
    /// far as needed to keep it in the window.
    pub fn scroll_to_col(&mut self, col: usize) {
        if col < self.cols {
            self.offset.col = 0;
            self.point.col = col;
        } else {
            self.offset.col = col + 1 - self.cols;
            self.point.col = self.cols - 1;
        }
    }

    /// One column right; scrolls at the right edge.
    pub fn advance_col(&mut self) {
        if self.point.col + 1 >= self.cols {
            self.offset.col += 1;
        } else {
            self.point.col += 1;
        }
    }

    /// One column left; scrolls at the left edge.
    pub fn retreat_col(&mut self) {
        if self.point.col == 0 {
            self.offset.col = self.offset.col.saturating_sub(1);
        } else {
            self.point.col -= 1;
        }
    }

    /// One row down; scrolls at the bottom edge.
    pub fn down_row(&mut self) {
        if self.point.row + 1 >= self.rows {
            self.offset.row += 1;
        } else {
            self.point.row += 1;
        }
    }

    /// One row up; scrolls at the top edge.
    pub fn up_row(&mut self) {
        if self.point.row == 0 {
            self.offset.row = self.offset.row.saturating_sub(1);
        } else {
            self.point.row -= 1;
        }
    }

    pub fn forward_char(&mut self, buf: &Buffer) {
        let row = self.file_row();
        if row < buf.line_count() && self.file_col() < buf.line_len(row) {
            self.advance_col();
        } else if row + 1 < buf.line_count() {
            self.offset.col = 0;
            self.point.col = 0;
            self.down_row();
        }
        self.point_fix(buf);
    }

    pub fn backward_char(&mut self, buf: &Buffer) {
        let row = self.file_row();
        if self.file_col() > 0 {
            self.retreat_col();
        } else if row > 0 {
            self.up_row();
            self.scroll_to_col(buf.line_len(row - 1));
        }
        self.point_fix(buf);
    }

    pub fn next_line(&mut self, buf: &Buffer) {
        if self.file_row() + 1 < buf.line_count() {
            self.down_row();
        }
        self.point_fix(buf);
    }

    pub fn prev_line(&mut self, buf: &Buffer) {
        self.up_row();
        self.point_fix(buf);
    }

    pub fn line_start(&mut self) {
        self.offset.col = 0;
        self.point.col = 0;
    }

    pub fn line_end(&mut self, buf: &Buffer) {
        self.scroll_to_col(buf.line_len(self.file_row()));
    }

    /// Move to the top of the window, then one window up.
    pub fn page_up(&mut self, buf: &Buffer) {
        self.point.row = 0;
        for _ in 0..self.rows {
            self.prev_line(buf);
        }
        self.point_fix(buf);
    }

    /// Move to the last line shown in the window, then one window down.
    pub fn page_down(&mut self, buf: &Buffer) {
        let last = buf.line_count().saturating_sub(1);
        self.point.row = (self.rows - 1).min(last.saturating_sub(self.offset.row));
        for _ in 0..self.rows {
            self.next_line(buf);
        }
        self.point_fix(buf);
    }
}
