//! Maps crossterm key events onto editor keys.
//!
//! Bindings follow Emacs: `C-f`/`C-b`/`C-n`/`C-p` move, `C-a`/`C-e` go to the line ends,
//! `C-d`/`C-h` delete, `C-m` is Enter. The arrow and editing keys map onto the same commands.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Resolve a key event. Returns `None` for releases and repeats the terminal reports separately.
pub fn from_event(ev: &KeyEvent) -> Option<Key> {
    if ev.kind != KeyEventKind::Press {
        return None;
    }

    if ev.modifiers.contains(KeyModifiers::CONTROL) {
        let KeyCode::Char(c) = ev.code else {
            return Some(Key::Unknown);
        };
        let key = match c.to_ascii_lowercase() {
            'f' => Key::Forward,
            'b' => Key::Backward,
            'n' => Key::NextLine,
            'p' => Key::PrevLine,
            'a' => Key::LineStart,
            'e' => Key::LineEnd,
            'd' => Key::DeleteForward,
            'h' => Key::DeleteBackward,
            'm' => Key::Newline,
            'k' => Key::KillLine,
            's' => Key::Save,
            'q' => Key::Quit,
            'l' => Key::OpenFile,
            'y' => Key::Find,
            _ => Key::Unknown,
        };
        return Some(key);
    }

    let key = match ev.code {
        KeyCode::Char(c) if c.is_ascii() && !c.is_ascii_control() => {
            u8::try_from(c).map_or(Key::Unknown, Key::Char)
        }
        KeyCode::Tab => Key::Char(b'\t'),
        KeyCode::Enter => Key::Newline,
        KeyCode::Backspace => Key::DeleteBackward,
        KeyCode::Delete => Key::DeleteForward,
        KeyCode::Right => Key::Forward,
        KeyCode::Left => Key::Backward,
        KeyCode::Down => Key::NextLine,
        KeyCode::Up => Key::PrevLine,
        KeyCode::Home => Key::LineStart,
        KeyCode::End => Key::LineEnd,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Escape,
        _ => Key::Unknown,
    };
    Some(key)
}
