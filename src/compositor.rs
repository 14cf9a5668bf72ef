//! Frame composition: turns the buffer, its highlighting and the window into one byte stream.
//!
//! Everything is queued into a `Vec<u8>` and handed back to the caller, which writes it in a
//! single call so the terminal never shows a half-drawn frame.

use crate::buffer::Buffer;
use crate::types::{Highlight, StatusMsg};
use crate::utils::{is_print, truncate_to_width};
use crate::viewport::ViewPort;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// The filename shown in the status line is cut to this many columns.
const STATUS_NAME_WIDTH: usize = 20;

/// Highlight colors are written as the basic `3x` SGR codes; crossterm's `Color::AnsiValue`
/// would emit the 256-color `38;5;n` form instead.
fn set_color(out: &mut Vec<u8>, code: u8) -> io::Result<()> {
    queue!(out, Print(format!("\x1b[{code}m")))
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Build a complete frame.
///
/// `message` is shown in the bottom line unless it is older than `timeout` at `now`.
pub fn compose(
    buf: &Buffer,
    view: &ViewPort,
    message: Option<&StatusMsg>,
    now: Instant,
    timeout: Duration,
) -> io::Result<Vec<u8>> {
    let mut out = Vec::with_capacity(view.rows * (view.cols + 16));
    queue!(out, cursor::Hide, cursor::MoveTo(0, 0))?;

    for y in 0..view.rows {
        let filerow = view.offset.row + y;
        match buf.line(filerow) {
            None => queue!(out, Print('~'), Clear(ClearType::UntilNewLine), Print("\r\n"))?,
            Some(line) => {
                draw_row(&mut out, line.render(), line.highlight(), view)?;
                queue!(out, SetForegroundColor(Color::Reset))?;
                queue!(out, Clear(ClearType::UntilNewLine), Print("\r\n"))?;
            }
        }
    }

    draw_status(&mut out, buf, view)?;

    queue!(out, Clear(ClearType::UntilNewLine))?;
    if let Some(msg) = message {
        if now.saturating_duration_since(msg.at) < timeout {
            queue!(out, Print(truncate_to_width(&msg.text, view.cols)))?;
        }
    }

    let col = view.screen_col(buf);
    queue!(
        out,
        cursor::MoveTo(to_u16(col), to_u16(view.point.row)),
        cursor::Show
    )?;
    Ok(out)
}

/// Visible slice of one line. Color sequences are only emitted when the class changes.
fn draw_row(out: &mut Vec<u8>, render: &[u8], hl: &[Highlight], view: &ViewPort) -> io::Result<()> {
    let start = view.offset.col.min(render.len());
    let end = (start + view.cols).min(render.len());
    let mut current: Option<u8> = None;

    for (&b, &class) in render[start..end].iter().zip(&hl[start..end]) {
        if class == Highlight::NonPrintable || !is_print(b) {
            let sym = if b <= 26 { b'@' + b } else { b'?' };
            queue!(out, SetAttribute(Attribute::Reverse))?;
            out.write_all(&[sym])?;
            queue!(out, SetAttribute(Attribute::Reset))?;
            current = None;
            continue;
        }
        match class.color() {
            None => {
                if current.take().is_some() {
                    queue!(out, SetForegroundColor(Color::Reset))?;
                }
            }
            Some(code) => {
                if current != Some(code) {
                    set_color(out, code)?;
                    current = Some(code);
                }
            }
        }
        out.write_all(&[b])?;
    }
    Ok(())
}

/// Reverse-video status line: name, line count and modified flag on the left, `row/total` at
/// the right edge.
fn draw_status(out: &mut Vec<u8>, buf: &Buffer, view: &ViewPort) -> io::Result<()> {
    queue!(out, Clear(ClearType::UntilNewLine))?;
    queue!(out, SetAttribute(Attribute::Reverse))?;

    let name = buf
        .filename
        .as_ref()
        .map_or_else(|| "[No Name]".to_string(), |p| p.display().to_string());
    let left = format!(
        "{} - {} lines {}",
        truncate_to_width(&name, STATUS_NAME_WIDTH),
        buf.line_count(),
        if buf.dirty { "(modified)" } else { "" }
    );
    let right = format!("{}/{}", view.file_row() + 1, buf.line_count());

    let left = truncate_to_width(&left, view.cols);
    queue!(out, Print(left))?;
    let mut len = UnicodeWidthStr::width(left);
    while len < view.cols {
        if view.cols - len == right.len() {
            queue!(out, Print(&right))?;
            break;
        }
        queue!(out, Print(' '))?;
        len += 1;
    }

    queue!(out, SetAttribute(Attribute::Reset))?;
    queue!(out, Print("\r\n"))
}
