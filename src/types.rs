//! Common types used throughout the editor.

use std::time::Instant;

/// A row/column pair.
///
/// Used both for the cursor `point` (relative to the window) and the scroll `offset` (the
/// window's top-left corner inside the file). Columns are **byte** indices into the raw line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Highlight class of one rendered byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    MlComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    NonPrintable,
    Match,
}

impl Highlight {
    /// SGR foreground code for this class, or `None` for the terminal default.
    pub fn color(self) -> Option<u8> {
        match self {
            Self::Comment | Self::MlComment => Some(36),
            Self::Keyword1 => Some(33),
            Self::Keyword2 => Some(32),
            Self::String => Some(35),
            Self::Number => Some(31),
            Self::Match => Some(34),
            Self::Normal | Self::NonPrintable => None,
        }
    }
}

/// A resolved logical key.
///
/// Decoding terminal escape sequences is crossterm's job; `keys::from_event` maps its events
/// onto this enum and the editor dispatches on it with a plain `match`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable byte (or a literal tab) to insert.
    Char(u8),
    Forward,
    Backward,
    NextLine,
    PrevLine,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
    Newline,
    DeleteBackward,
    DeleteForward,
    KillLine,
    Save,
    Quit,
    OpenFile,
    Find,
    Escape,
    /// A key with no binding.
    Unknown,
}

/// The different prompt modes shown in the message line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Find,
}

/// Prompt state (what the user is typing at the bottom).
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    /// What the message line shows while the prompt is active.
    pub fn text(&self) -> String {
        match self.kind {
            PromptKind::Open => format!("File name: {} (Use ESC/Enter)", self.input),
            PromptKind::Find => format!("Search: {} (Use ESC/Arrows/Enter)", self.input),
        }
    }
}

/// Short-lived message shown in the message line.
#[derive(Clone, Debug)]
pub struct StatusMsg {
    pub text: String,
    pub at: Instant,
}
