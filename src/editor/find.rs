//! Incremental search over the rendered text.

use super::Editor;
use crate::types::{Highlight, Point, Prompt, PromptKind};
use crate::utils::raw_col;

/// What an active search needs to undo itself.
pub(super) struct FindState {
    saved_offset: Point,
    saved_point: Point,
    /// Row of the current match; the next step starts after (or before) it.
    last_match: Option<usize>,
    /// Highlight of the matched row before it was marked.
    saved_hl: Option<(usize, Vec<Highlight>)>,
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

impl Editor {
    pub(super) fn start_find(&mut self) {
        self.find = Some(FindState {
            saved_offset: self.view.offset,
            saved_point: self.view.point,
            last_match: None,
            saved_hl: None,
        });
        self.prompt = Some(Prompt::new(PromptKind::Find));
    }

    /// Search for `query` and jump to the match.
    ///
    /// `forward` is `None` when the query just changed: the search restarts from the first line.
    /// Otherwise it continues from the last match in the given direction, wrapping around.
    pub(super) fn find_step(&mut self, query: &str, forward: Option<bool>) {
        let Some(mut state) = self.find.take() else {
            return;
        };
        if let Some((row, hl)) = state.saved_hl.take() {
            self.buf.restore_highlight(row, hl);
        }
        if forward.is_none() {
            state.last_match = None;
        }
        let forward = forward.unwrap_or(true) || state.last_match.is_none();

        let needle = query.as_bytes();
        let n = self.buf.line_count();
        if !needle.is_empty() {
            let mut current = state.last_match;
            for _ in 0..n {
                let row = match current {
                    None => 0,
                    Some(c) if forward => (c + 1) % n,
                    Some(c) => (c + n - 1) % n,
                };
                current = Some(row);
                let found = self.buf.line(row).and_then(|line| {
                    find_bytes(line.render(), needle).map(|at| (at, raw_col(line.raw(), at)))
                });
                if let Some((at, col)) = found {
                    state.last_match = Some(row);
                    state.saved_hl = self.buf.mark_match(row, at, needle.len()).map(|hl| (row, hl));
                    self.view.jump_to(row, col);
                    break;
                }
            }
        }
        self.find = Some(state);
    }

    /// Leave search mode. Highlighting is always restored; the cursor only when `cancel`.
    pub(super) fn end_find(&mut self, cancel: bool) {
        let Some(state) = self.find.take() else {
            return;
        };
        if let Some((row, hl)) = state.saved_hl {
            self.buf.restore_highlight(row, hl);
        }
        if cancel {
            self.view.offset = state.saved_offset;
            self.view.point = state.saved_point;
        }
    }
}
