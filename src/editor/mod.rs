//! Editor: the application state owned by the main loop.
//!
//! Everything the editor knows lives in [`Editor`]; key handling, editing, file operations and
//! rendering are split across the submodules as `impl Editor` blocks.

mod editing;
mod file_ops;
mod find;
mod input;
mod render;

use crate::buffer::Buffer;
use crate::config::Config;
use crate::syntax::Profile;
use crate::types::{Prompt, StatusMsg};
use crate::viewport::ViewPort;
use std::time::{Duration, Instant};
use tracing::debug;

use find::FindState;

/// The top-level application state.
pub struct Editor {
    /// The open file.
    pub(crate) buf: Buffer,
    /// Window size, scroll offset and cursor.
    pub(crate) view: ViewPort,
    /// Language profiles, searched in order when a file is opened.
    profiles: Vec<Profile>,
    /// Optional bottom-line prompt.
    pub(crate) prompt: Option<Prompt>,
    /// State of an active incremental search.
    find: Option<FindState>,
    /// Short-lived message for the bottom line.
    pub(crate) message: Option<StatusMsg>,
    message_timeout: Duration,
    /// `C-q` presses needed to quit a dirty buffer.
    quit_times: u32,
    quit_left: u32,
    /// Whether the screen needs to be redrawn.
    pub(crate) needs_redraw: bool,
}

impl Editor {
    /// An editor with an empty, unnamed buffer and a `rows` x `cols` text area.
    pub fn new(config: &Config, rows: usize, cols: usize) -> Self {
        Self {
            buf: Buffer::new(config.max_line_columns),
            view: ViewPort::new(rows, cols),
            profiles: config.profiles(),
            prompt: None,
            find: None,
            message: None,
            message_timeout: config.message_timeout(),
            quit_times: config.quit_times,
            quit_left: config.quit_times,
            needs_redraw: true,
        }
    }

    /// Show `text` in the message line.
    pub fn set_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(message = %text, "message");
        self.message = Some(StatusMsg {
            text,
            at: Instant::now(),
        });
        self.needs_redraw = true;
    }

    /// Idle hook: expire the message once it is older than the timeout.
    pub fn tick(&mut self, now: Instant) {
        if let Some(msg) = &self.message {
            if now.saturating_duration_since(msg.at) >= self.message_timeout {
                self.message = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Adopt a new text area size.
    pub fn on_resize(&mut self, rows: usize, cols: usize) {
        debug!(rows, cols, "resize");
        self.view.resize(rows, cols);
        self.view.point_fix(&self.buf);
        self.needs_redraw = true;
    }
}
