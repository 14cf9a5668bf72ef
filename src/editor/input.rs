//! Key dispatch: one resolved key at a time.

use super::Editor;
use crate::types::{Key, PromptKind};
use crate::utils::is_print;
use anyhow::Result;
use tracing::info;

/// Longest prompt input accepted.
const QUERY_LEN: usize = 256;

const HELP: &str = "unknown command. HELP: C-s: save | C-q: quit | C-l: open | C-y: find";

impl Editor {
    /// Handle one key. Returns `true` when the editor should exit.
    pub fn process(&mut self, key: Key) -> Result<bool> {
        self.needs_redraw = true;
        if key != Key::Quit {
            self.quit_left = self.quit_times;
        }
        if self.prompt.is_some() {
            self.process_prompt(key)?;
            return Ok(false);
        }

        match key {
            Key::Char(b) => self.insert_char(b)?,
            Key::Newline => self.insert_newline()?,
            Key::DeleteBackward => self.delete_backward()?,
            Key::DeleteForward => self.delete_forward()?,
            Key::KillLine => self.kill_line()?,
            Key::Forward => self.view.forward_char(&self.buf),
            Key::Backward => self.view.backward_char(&self.buf),
            Key::NextLine => self.view.next_line(&self.buf),
            Key::PrevLine => self.view.prev_line(&self.buf),
            Key::LineStart => self.view.line_start(),
            Key::LineEnd => self.view.line_end(&self.buf),
            Key::PageUp => self.view.page_up(&self.buf),
            Key::PageDown => self.view.page_down(&self.buf),
            Key::Save => self.save(),
            Key::OpenFile => self.start_open(),
            Key::Find => self.start_find(),
            Key::Quit => return Ok(self.confirm_quit()),
            Key::Escape => {}
            Key::Unknown => self.set_message(HELP),
        }
        Ok(false)
    }

    /// With unsaved changes, quitting takes `quit_times` extra presses.
    fn confirm_quit(&mut self) -> bool {
        if !self.buf.dirty || self.quit_left == 0 {
            info!(dirty = self.buf.dirty, "quit");
            return true;
        }
        self.set_message(format!(
            "WARNING!!! unsaved changes. Press C-q {} more times to quit.",
            self.quit_left
        ));
        self.quit_left -= 1;
        false
    }

    /// Keys typed while a prompt owns the message line.
    fn process_prompt(&mut self, key: Key) -> Result<()> {
        let Some(mut prompt) = self.prompt.take() else {
            return Ok(());
        };
        let find = prompt.kind == PromptKind::Find;

        match key {
            Key::Escape => {
                if find {
                    self.end_find(true);
                }
                self.message = None;
                return Ok(());
            }
            Key::Newline => {
                self.message = None;
                return if find {
                    self.end_find(false);
                    Ok(())
                } else {
                    self.finish_open(&prompt.input)
                };
            }
            Key::DeleteBackward => {
                prompt.input.pop();
                if find {
                    self.find_step(&prompt.input, None);
                }
            }
            Key::Char(b) if is_print(b) && prompt.input.len() < QUERY_LEN => {
                prompt.input.push(char::from(b));
                if find {
                    self.find_step(&prompt.input, None);
                }
            }
            Key::Forward | Key::NextLine if find => self.find_step(&prompt.input, Some(true)),
            Key::Backward | Key::PrevLine if find => self.find_step(&prompt.input, Some(false)),
            _ => {}
        }
        self.prompt = Some(prompt);
        Ok(())
    }
}
