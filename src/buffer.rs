//! The document buffer: an ordered list of lines, each carrying its rendered form and highlight.
//!
//! Every mutation re-renders the touched line and re-runs the classifier before returning, so a
//! `Line`'s `render`/`hl` are never stale relative to its `raw` bytes.

use crate::syntax::{self, Profile};
use crate::types::Highlight;
use crate::utils::{render_col, TAB_STOP};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Default limit on a line's rendered width.
pub const DEFAULT_MAX_LINE_COLUMNS: usize = 32_768;

/// Errors from line-level operations. A failed operation leaves the buffer untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("line {index} out of range (buffer has {len} lines)")]
    OutOfRange { index: usize, len: usize },
    #[error("line would render {width} columns wide (limit is {max})")]
    LineTooLong { width: usize, max: usize },
}

/// One line of the file.
#[derive(Clone, Debug)]
pub struct Line {
    /// Position in the file; always equals the line's slot in `Buffer::lines`.
    idx: usize,
    /// Bytes as typed or loaded, without the newline.
    raw: Vec<u8>,
    /// `raw` with tabs expanded.
    render: Vec<u8>,
    /// One class per byte of `render`.
    hl: Vec<Highlight>,
    /// The line ends inside an unterminated block comment.
    open_comment: bool,
}

impl Line {
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn render(&self) -> &[u8] {
        &self.render
    }

    pub fn highlight(&self) -> &[Highlight] {
        &self.hl
    }
}

/// Expand tabs to the next tab stop. Other bytes are kept; non-printables are flagged by the
/// classifier and drawn specially by the compositor.
fn render_raw(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &b in raw {
        if b == b'\t' {
            out.push(b' ');
            while out.len() % TAB_STOP != 0 {
                out.push(b' ');
            }
        } else {
            out.push(b);
        }
    }
    out
}

/// The open file.
pub struct Buffer {
    lines: Vec<Line>,
    profile: Option<Profile>,
    pub filename: Option<PathBuf>,
    /// "Dirty" means there are unsaved changes.
    pub dirty: bool,
    max_columns: usize,
}

impl Buffer {
    /// An empty buffer whose lines may render at most `max_columns` wide.
    pub fn new(max_columns: usize) -> Self {
        Self {
            lines: Vec::new(),
            profile: None,
            filename: None,
            dirty: false,
            max_columns,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, at: usize) -> Option<&Line> {
        self.lines.get(at)
    }

    /// Raw length of line `at`, or 0 past the end of the file.
    pub fn line_len(&self, at: usize) -> usize {
        self.lines.get(at).map_or(0, |l| l.raw.len())
    }

    /// Switch the language profile and re-classify the whole file.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.profile = profile;
        for at in 0..self.lines.len() {
            let in_comment = at > 0 && self.lines[at - 1].open_comment;
            let line = &mut self.lines[at];
            let (hl, open) = syntax::highlight_line(&line.render, self.profile.as_ref(), in_comment);
            line.hl = hl;
            line.open_comment = open;
        }
    }

    fn out_of_range(&self, index: usize) -> BufferError {
        BufferError::OutOfRange {
            index,
            len: self.lines.len(),
        }
    }

    fn check_width(&self, raw: &[u8]) -> Result<(), BufferError> {
        let width = render_col(raw, raw.len());
        if width > self.max_columns {
            return Err(BufferError::LineTooLong {
                width,
                max: self.max_columns,
            });
        }
        Ok(())
    }

    /// Re-classify line `at`, then keep going down the file while the open-comment state of the
    /// line just processed differs from what it was. Returns the number of lines classified.
    fn rehighlight(&mut self, at: usize) -> usize {
        let mut next = Some(at);
        let mut touched = 0;
        while let Some(i) = next.take() {
            let in_comment = i > 0 && self.lines[i - 1].open_comment;
            let line = &mut self.lines[i];
            debug_assert_eq!(line.idx, i);
            let (hl, open) = syntax::highlight_line(&line.render, self.profile.as_ref(), in_comment);
            line.hl = hl;
            let changed = line.open_comment != open;
            line.open_comment = open;
            touched += 1;
            if changed && i + 1 < self.lines.len() {
                next = Some(i + 1);
            }
        }
        if touched > 1 {
            debug!(from = at, lines = touched, "comment state propagated");
        }
        touched
    }

    /// Replace the raw bytes of line `at`, re-render it and re-classify.
    fn replace_raw(&mut self, at: usize, raw: Vec<u8>) -> Result<(), BufferError> {
        self.check_width(&raw)?;
        let line = &mut self.lines[at];
        line.render = render_raw(&raw);
        line.raw = raw;
        self.rehighlight(at);
        self.dirty = true;
        Ok(())
    }

    /// Insert a new line holding `bytes` at `at` (`at == line_count()` appends).
    pub fn insert(&mut self, at: usize, bytes: &[u8]) -> Result<(), BufferError> {
        if at > self.lines.len() {
            return Err(self.out_of_range(at));
        }
        self.check_width(bytes)?;
        // Start from the state the following line was seeded with, so a change is propagated.
        let open_comment = at > 0 && self.lines[at - 1].open_comment;
        self.lines.insert(
            at,
            Line {
                idx: at,
                raw: bytes.to_vec(),
                render: render_raw(bytes),
                hl: Vec::new(),
                open_comment,
            },
        );
        for (j, line) in self.lines.iter_mut().enumerate().skip(at + 1) {
            line.idx = j;
        }
        self.rehighlight(at);
        self.dirty = true;
        Ok(())
    }

    /// Remove line `at`. The caller re-clamps the cursor.
    pub fn delete(&mut self, at: usize) -> Result<(), BufferError> {
        if at >= self.lines.len() {
            return Err(self.out_of_range(at));
        }
        self.lines.remove(at);
        for (j, line) in self.lines.iter_mut().enumerate().skip(at) {
            line.idx = j;
        }
        if at < self.lines.len() {
            self.rehighlight(at);
        }
        self.dirty = true;
        Ok(())
    }

    /// Put `byte` at column `col` of line `at`, shifting the rest right. Past the end of the
    /// line, the gap is filled with spaces first.
    pub fn set_char(&mut self, at: usize, col: usize, byte: u8) -> Result<(), BufferError> {
        let line = self.lines.get(at).ok_or_else(|| self.out_of_range(at))?;
        let mut raw = line.raw.clone();
        if col > raw.len() {
            raw.resize(col, b' ');
        }
        raw.insert(col, byte);
        self.replace_raw(at, raw)
    }

    /// Remove the byte at column `col` of line `at`; no-op past the end of the line.
    pub fn delete_char(&mut self, at: usize, col: usize) -> Result<(), BufferError> {
        let line = self.lines.get(at).ok_or_else(|| self.out_of_range(at))?;
        if col >= line.raw.len() {
            return Ok(());
        }
        let mut raw = line.raw.clone();
        raw.remove(col);
        self.replace_raw(at, raw)
    }

    /// Append `bytes` to line `at`.
    pub fn append(&mut self, at: usize, bytes: &[u8]) -> Result<(), BufferError> {
        let line = self.lines.get(at).ok_or_else(|| self.out_of_range(at))?;
        let mut raw = line.raw.clone();
        raw.extend_from_slice(bytes);
        self.replace_raw(at, raw)
    }

    /// Split line `at` at column `col` (clamped to the line), moving the tail to a new line.
    pub fn split(&mut self, at: usize, col: usize) -> Result<(), BufferError> {
        let line = self.lines.get(at).ok_or_else(|| self.out_of_range(at))?;
        let col = col.min(line.raw.len());
        let (head, tail) = line.raw.split_at(col);
        let (head, tail) = (head.to_vec(), tail.to_vec());
        self.insert(at + 1, &tail)?;
        self.replace_raw(at, head)
    }

    /// Append line `at + 1` onto line `at` and remove it.
    pub fn join_with_next(&mut self, at: usize) -> Result<(), BufferError> {
        if at + 1 >= self.lines.len() {
            return Err(self.out_of_range(at + 1));
        }
        let tail = self.lines[at + 1].raw.clone();
        self.append(at, &tail)?;
        self.delete(at + 1)
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.dirty = false;
    }

    /// Replace the content with `text`, split on `\n`. A trailing `\r` is stripped from each
    /// line and a final newline does not start an extra line.
    pub fn load(&mut self, text: &[u8]) -> Result<(), BufferError> {
        self.clear();
        if !text.is_empty() {
            let body = text.strip_suffix(b"\n").unwrap_or(text);
            for line in body.split(|&b| b == b'\n') {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                self.insert(self.lines.len(), line)?;
            }
        }
        self.dirty = false;
        Ok(())
    }

    /// Serialize the buffer: every line followed by `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.lines.iter().map(|l| l.raw.len() + 1).sum();
        let mut out = Vec::with_capacity(len);
        for line in &self.lines {
            out.extend_from_slice(&line.raw);
            out.push(b'\n');
        }
        out
    }

    /// Write the buffer to its file: truncate to the new length, then a single write.
    ///
    /// Returns the number of bytes written. On failure the buffer stays dirty.
    pub fn save(&mut self) -> io::Result<usize> {
        let path = self
            .filename
            .as_ref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no file name"))?;
        let bytes = self.to_bytes();
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        file.set_len(bytes.len() as u64)?;
        file.write_all(&bytes)?;
        self.dirty = false;
        Ok(bytes.len())
    }

    /// Mark `len` rendered bytes of line `at` starting at `start` as a search match.
    ///
    /// Returns the previous highlight so it can be put back with `restore_highlight`.
    pub fn mark_match(&mut self, at: usize, start: usize, len: usize) -> Option<Vec<Highlight>> {
        let line = self.lines.get_mut(at)?;
        let saved = line.hl.clone();
        let end = (start + len).min(line.hl.len());
        line.hl[start.min(end)..end].fill(Highlight::Match);
        Some(saved)
    }

    pub fn restore_highlight(&mut self, at: usize, saved: Vec<Highlight>) {
        if let Some(line) = self.lines.get_mut(at) {
            if saved.len() == line.hl.len() {
                line.hl = saved;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{builtin_profiles, Profile};
    use crate::types::Highlight::{Keyword1, MlComment, Normal, Number};

    fn buffer(lines: &[&str]) -> Buffer {
        let mut buf = Buffer::new(DEFAULT_MAX_LINE_COLUMNS);
        for (i, l) in lines.iter().enumerate() {
            buf.insert(i, l.as_bytes()).unwrap();
        }
        buf
    }

    fn c_buffer(lines: &[&str]) -> Buffer {
        let mut buf = buffer(lines);
        buf.set_profile(builtin_profiles().into_iter().next());
        buf
    }

    fn raws(buf: &Buffer) -> Vec<String> {
        buf.lines
            .iter()
            .map(|l| String::from_utf8_lossy(&l.raw).into_owned())
            .collect()
    }

    /// Every line's derived data must equal a from-scratch recomputation.
    fn assert_consistent(buf: &Buffer) {
        let mut in_comment = false;
        for (i, line) in buf.lines.iter().enumerate() {
            assert_eq!(line.idx, i, "index of line {i}");
            assert_eq!(line.render, render_raw(&line.raw), "render of line {i}");
            assert_eq!(line.hl.len(), line.render.len(), "hl length of line {i}");
            let (hl, open) = syntax::highlight_line(&line.render, buf.profile.as_ref(), in_comment);
            assert_eq!(line.hl, hl, "highlight of line {i}");
            assert_eq!(line.open_comment, open, "open comment of line {i}");
            in_comment = open;
        }
    }

    // ==================== insert / delete ====================

    #[test]
    fn new_buffer_is_empty_and_clean() {
        let buf = Buffer::new(DEFAULT_MAX_LINE_COLUMNS);
        assert_eq!(buf.line_count(), 0);
        assert!(!buf.dirty);
        assert_eq!(buf.line_len(0), 0);
    }

    #[test]
    fn insert_restamps_indices() {
        let mut buf = buffer(&["a", "c"]);
        buf.insert(1, b"b").unwrap();
        buf.insert(0, b"start").unwrap();
        assert_eq!(raws(&buf), ["start", "a", "b", "c"]);
        assert!(buf.dirty);
        assert_consistent(&buf);
    }

    #[test]
    fn insert_out_of_range_is_a_noop() {
        let mut buf = buffer(&["a"]);
        buf.dirty = false;
        assert_eq!(
            buf.insert(2, b"x"),
            Err(BufferError::OutOfRange { index: 2, len: 1 })
        );
        assert_eq!(raws(&buf), ["a"]);
        assert!(!buf.dirty);
    }

    #[test]
    fn delete_out_of_range_is_a_noop() {
        let mut buf = buffer(&["a"]);
        assert!(matches!(buf.delete(1), Err(BufferError::OutOfRange { .. })));
        assert_eq!(raws(&buf), ["a"]);
    }

    #[test]
    fn insert_then_delete_restores_content() {
        let mut buf = buffer(&["one", "two", "three"]);
        buf.dirty = false;
        buf.insert(1, b"extra").unwrap();
        buf.delete(1).unwrap();
        assert_eq!(raws(&buf), ["one", "two", "three"]);
        assert!(buf.dirty);
        assert_consistent(&buf);
    }

    // ==================== rendering ====================

    #[test]
    fn tabs_expand_to_next_stop() {
        let buf = buffer(&["\tx", "abc\td", "12345678\t9"]);
        assert_eq!(buf.lines[0].render, b"        x");
        assert_eq!(buf.lines[1].render, b"abc     d");
        assert_eq!(buf.lines[2].render, b"12345678        9");
    }

    #[test]
    fn render_length_bound() {
        for raw in ["", "plain", "\t", "\t\t", "a\tb\tc", "1234567\t", "\x01\t\x7f"] {
            let render = render_raw(raw.as_bytes());
            let tabs = raw.bytes().filter(|&b| b == b'\t').count();
            assert!(render.len() <= raw.len() + 7 * tabs, "{raw:?}");
            assert!(render.len() >= raw.len());
        }
        let buf = c_buffer(&["\tint x = 1;\t// c", "\x01\x02"]);
        assert_consistent(&buf);
    }

    #[test]
    fn non_printable_bytes_are_kept_in_render() {
        let buf = buffer(&["a\x01b"]);
        assert_eq!(buf.lines[0].render, b"a\x01b");
    }

    #[test]
    fn too_long_line_is_rejected_without_mutation() {
        let mut buf = Buffer::new(16);
        buf.insert(0, b"0123456789").unwrap();
        assert_eq!(
            buf.insert(1, b"\t\t\t"),
            Err(BufferError::LineTooLong { width: 24, max: 16 })
        );
        assert_eq!(buf.line_count(), 1);
        assert!(matches!(
            buf.append(0, b"abcdefghij"),
            Err(BufferError::LineTooLong { .. })
        ));
        assert_eq!(raws(&buf), ["0123456789"]);
        assert!(buf.set_char(0, 16, b'x').is_err());
        assert_eq!(raws(&buf), ["0123456789"]);
    }

    // ==================== character edits ====================

    #[test]
    fn set_char_inserts_and_shifts() {
        let mut buf = buffer(&["ac"]);
        buf.set_char(0, 1, b'b').unwrap();
        buf.set_char(0, 3, b'd').unwrap();
        assert_eq!(raws(&buf), ["abcd"]);
    }

    #[test]
    fn set_char_past_end_pads_with_spaces() {
        let mut buf = buffer(&["ab"]);
        buf.set_char(0, 5, b'x').unwrap();
        assert_eq!(raws(&buf), ["ab   x"]);
        assert_consistent(&buf);
    }

    #[test]
    fn set_char_missing_line() {
        let mut buf = buffer(&[]);
        assert!(matches!(
            buf.set_char(0, 0, b'x'),
            Err(BufferError::OutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn delete_char_past_end_is_noop() {
        let mut buf = buffer(&["abc"]);
        buf.dirty = false;
        buf.delete_char(0, 3).unwrap();
        assert_eq!(raws(&buf), ["abc"]);
        assert!(!buf.dirty);
        buf.delete_char(0, 1).unwrap();
        assert_eq!(raws(&buf), ["ac"]);
        assert!(buf.dirty);
    }

    #[test]
    fn append_concatenates() {
        let mut buf = buffer(&["foo"]);
        buf.append(0, b"\tbar").unwrap();
        assert_eq!(buf.lines[0].raw, b"foo\tbar");
        assert_eq!(buf.lines[0].render, b"foo     bar");
    }

    // ==================== split / join ====================

    #[test]
    fn split_in_middle() {
        let mut buf = buffer(&["hello world", "next"]);
        buf.split(0, 5).unwrap();
        assert_eq!(raws(&buf), ["hello", " world", "next"]);
        assert_consistent(&buf);
    }

    #[test]
    fn split_clamps_column() {
        let mut buf = buffer(&["abc"]);
        buf.split(0, 99).unwrap();
        assert_eq!(raws(&buf), ["abc", ""]);
        buf.split(0, 0).unwrap();
        assert_eq!(raws(&buf), ["", "abc", ""]);
    }

    #[test]
    fn join_with_next_merges() {
        let mut buf = buffer(&["line1", "line2", "line3"]);
        buf.join_with_next(0).unwrap();
        assert_eq!(raws(&buf), ["line1line2", "line3"]);
        assert_consistent(&buf);
        assert!(matches!(
            buf.join_with_next(1),
            Err(BufferError::OutOfRange { .. })
        ));
        assert_eq!(raws(&buf), ["line1line2", "line3"]);
    }

    // ==================== comment propagation ====================

    #[test]
    fn opening_comment_propagates_until_end_marker() {
        let mut buf = c_buffer(&["int a;", "b = 1;", "c */", "d"]);
        assert!(buf.lines.iter().all(|l| !l.open_comment));

        buf.set_char(0, 0, b'/').unwrap();
        buf.set_char(0, 1, b'*').unwrap();
        assert!(buf.lines[0].open_comment);
        assert!(buf.lines[1].open_comment);
        assert!(buf.lines[1].hl.iter().all(|&h| h == MlComment));
        assert!(!buf.lines[2].open_comment);
        assert!(buf.lines[2].hl.iter().all(|&h| h == MlComment));
        assert!(buf.lines[3].hl.iter().all(|&h| h == Normal));
        assert_consistent(&buf);

        buf.delete_char(0, 0).unwrap();
        assert!(buf.lines.iter().all(|l| !l.open_comment));
        assert_consistent(&buf);
    }

    #[test]
    fn unterminated_comment_reaches_end_of_file() {
        let mut buf = c_buffer(&["a", "b", "c", "d", "e"]);
        buf.insert(0, b"/*").unwrap();
        assert!(buf.lines.iter().all(|l| l.open_comment));
        assert_consistent(&buf);
    }

    #[test]
    fn propagation_stops_at_first_unchanged_line() {
        let mut buf = c_buffer(&["x", "a", "b */", "c", "d"]);
        buf.lines[0].raw = b"/*".to_vec();
        buf.lines[0].render = render_raw(b"/*");
        // Lines 0..=2 change, line 2 closes the comment and keeps its old state.
        assert_eq!(buf.rehighlight(0), 3);
        assert_consistent(&buf);

        // Re-running with nothing changed touches a single line.
        assert_eq!(buf.rehighlight(0), 1);
    }

    #[test]
    fn block_comment_scenario_on_load() {
        let mut buf = Buffer::new(DEFAULT_MAX_LINE_COLUMNS);
        buf.set_profile(builtin_profiles().into_iter().next());
        buf.load(b"/* start\nend */\n").unwrap();
        assert_eq!(buf.lines[0].hl, vec![MlComment; 8]);
        assert!(buf.lines[0].open_comment);
        assert_eq!(buf.lines[1].hl, vec![MlComment; 6]);
        assert!(!buf.lines[1].open_comment);
    }

    #[test]
    fn def_return_scenario_on_load() {
        let mut buf = Buffer::new(DEFAULT_MAX_LINE_COLUMNS);
        buf.set_profile(Some(
            Profile::new("py", &[".py"], &["def", "return"]).with_numbers(true),
        ));
        buf.load(b"def f():\n  return 1\n").unwrap();
        assert_eq!(buf.line_count(), 2);

        let first = &buf.lines[0].hl;
        assert_eq!(&first[..3], &[Keyword1; 3]);
        assert!(first[3..].iter().all(|&h| h == Normal));

        let second = &buf.lines[1].hl;
        assert_eq!(&second[..2], &[Normal; 2]);
        assert_eq!(&second[2..8], &[Keyword1; 6]);
        assert_eq!(second[8], Normal);
        assert_eq!(second[9], Number);
        assert_eq!(second.len(), 10);
    }

    #[test]
    fn inserting_comment_end_between_lines_reseeds_the_rest() {
        let mut buf = c_buffer(&["/*", "x", "y"]);
        buf.insert(1, b"*/").unwrap();
        assert!(!buf.lines[1].open_comment);
        assert!(buf.lines[2].hl.iter().all(|&h| h == Normal));
        assert_consistent(&buf);
    }

    #[test]
    fn deleting_comment_start_line_reseeds() {
        let mut buf = c_buffer(&["a", "/*", "x", "y */", "z"]);
        buf.delete(1).unwrap();
        assert_consistent(&buf);
        assert!(buf.lines[1].hl.iter().all(|&h| h == Normal));
    }

    #[test]
    fn joins_and_splits_keep_comment_state_consistent() {
        let mut buf = c_buffer(&["/* a", "*/", "b", "c /*", "d"]);
        buf.join_with_next(0).unwrap();
        assert_consistent(&buf);
        buf.split(0, 2).unwrap();
        assert_consistent(&buf);
        buf.join_with_next(2).unwrap();
        assert_consistent(&buf);
        buf.delete(0).unwrap();
        assert_consistent(&buf);
    }

    #[test]
    fn changing_profile_reclassifies() {
        let mut buf = buffer(&["/* x", "y"]);
        assert!(buf.lines[1].hl.iter().all(|&h| h == Normal));
        buf.set_profile(builtin_profiles().into_iter().next());
        assert_consistent(&buf);
        assert!(buf.lines[1].hl.iter().all(|&h| h == MlComment));
        buf.set_profile(None);
        assert_consistent(&buf);
    }

    // ==================== load / save ====================

    #[test]
    fn load_strips_line_endings() {
        let mut buf = Buffer::new(DEFAULT_MAX_LINE_COLUMNS);
        buf.load(b"a\r\nb\n\nc").unwrap();
        assert_eq!(raws(&buf), ["a", "b", "", "c"]);
        assert!(!buf.dirty);

        buf.load(b"").unwrap();
        assert_eq!(buf.line_count(), 0);
        buf.load(b"\n").unwrap();
        assert_eq!(raws(&buf), [""]);
    }

    #[test]
    fn save_writes_lines_and_clears_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        // Longer existing content must be truncated away.
        std::fs::write(&path, "previous content that is much longer\n").unwrap();

        let mut buf = buffer(&["line1", "line2", "line3"]);
        buf.filename = Some(path.clone());
        assert!(buf.dirty);
        assert_eq!(buf.save().unwrap(), 18);
        assert!(!buf.dirty);
        assert_eq!(std::fs::read(&path).unwrap(), b"line1\nline2\nline3\n");
    }

    #[test]
    fn save_failure_keeps_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let mut buf = buffer(&["x"]);
        buf.filename = Some(dir.path().join("missing").join("out.txt"));
        assert!(buf.save().is_err());
        assert!(buf.dirty);

        buf.filename = None;
        assert!(buf.save().is_err());
        assert!(buf.dirty);
    }

    // ==================== search marks ====================

    #[test]
    fn match_marks_are_restorable() {
        let mut buf = c_buffer(&["int find_me;"]);
        let before = buf.lines[0].hl.clone();
        let saved = buf.mark_match(0, 4, 7).unwrap();
        assert!(buf.lines[0].hl[4..11].iter().all(|&h| h == Highlight::Match));
        buf.restore_highlight(0, saved);
        assert_eq!(buf.lines[0].hl, before);
        assert!(buf.mark_match(3, 0, 1).is_none());
    }
}
