//! File operations: open and save.

use super::Editor;
use crate::syntax;
use crate::types::{Prompt, PromptKind};
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// Read a whole file. A missing file reads as empty so it can be created on save.
fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    match fs::read(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        other => other,
    }
}

impl Editor {
    /// Open `path`, replacing the buffer.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let text =
            read_file(path).with_context(|| format!("Failed to read {}", path.display()))?;
        self.load(path, &text)
    }

    /// Replace the buffer with `text` and pick a profile for `path`.
    fn load(&mut self, path: &Path, text: &[u8]) -> Result<()> {
        self.buf.load(text)?;
        self.buf.filename = Some(path.to_path_buf());
        let profile = syntax::select(&self.profiles, &path.to_string_lossy()).cloned();
        info!(
            path = %path.display(),
            lines = self.buf.line_count(),
            profile = profile.as_ref().map_or("none", |p| p.name.as_str()),
            "opened"
        );
        self.buf.set_profile(profile);
        self.view.reset();
        Ok(())
    }

    /// Write the buffer to disk, reporting the outcome in the message line.
    pub(super) fn save(&mut self) {
        match self.buf.save() {
            Ok(n) => {
                info!(bytes = n, "saved");
                self.set_message(format!("{n} bytes written on disk"));
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.set_message(format!("Can't save! I/O error: {e}"));
            }
        }
    }

    /// `C-l`: ask for a file name, unless there are unsaved changes.
    pub(super) fn start_open(&mut self) {
        if self.buf.dirty {
            self.set_message("You must first write or discard the current changes");
            return;
        }
        self.prompt = Some(Prompt::new(PromptKind::Open));
    }

    /// Open the name typed at the prompt. Read errors are reported, not fatal.
    pub(super) fn finish_open(&mut self, name: &str) -> Result<()> {
        self.set_message(format!("Opening {name}"));
        let path = Path::new(name);
        match read_file(path) {
            Ok(text) => self.load(path, &text)?,
            Err(e) => {
                warn!(path = name, error = %e, "open failed");
                self.set_message(format!("Can't open {name}: {e}"));
            }
        }
        Ok(())
    }
}
