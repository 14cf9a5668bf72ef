//! Syntax highlighting: language profiles and the per-line classifier.
//!
//! A [`Profile`] describes a language (keywords, comment markers, flags). [`highlight_line`]
//! classifies one line's rendered bytes and reports whether the line ends inside a block comment;
//! the buffer feeds that state into the next line (see `Buffer::rehighlight`).

use crate::types::Highlight;
use crate::utils::{is_print, is_separator};

/// A keyword and the class it highlights as.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Keyword {
    word: Vec<u8>,
    class: Highlight,
}

impl Keyword {
    /// Parse a keyword table entry. A trailing `|` marks a type-like keyword (`Keyword2`).
    fn parse(entry: &str) -> Option<Self> {
        let (word, class) = match entry.strip_suffix('|') {
            Some(w) => (w, Highlight::Keyword2),
            None => (entry, Highlight::Keyword1),
        };
        (!word.is_empty()).then(|| Self {
            word: word.as_bytes().to_vec(),
            class,
        })
    }
}

/// A language definition driving the classifier. Immutable once built.
#[derive(Clone, Debug)]
pub struct Profile {
    pub name: String,
    filematch: Vec<String>,
    keywords: Vec<Keyword>,
    singleline_comment: Option<Vec<u8>>,
    block_comment: Option<(Vec<u8>, Vec<u8>)>,
    highlight_strings: bool,
    highlight_numbers: bool,
}

/// Empty markers would never consume input, so they are treated as absent.
fn marker(s: &str) -> Option<Vec<u8>> {
    (!s.is_empty()).then(|| s.as_bytes().to_vec())
}

impl Profile {
    /// Create a profile with no comments and no string/number highlighting.
    ///
    /// `keywords` entries ending in `|` are type-like and highlight as `Keyword2`.
    pub fn new<S: AsRef<str>>(name: impl Into<String>, filematch: &[S], keywords: &[S]) -> Self {
        Self {
            name: name.into(),
            filematch: filematch
                .iter()
                .map(|p| p.as_ref().to_string())
                .filter(|p| !p.is_empty())
                .collect(),
            keywords: keywords
                .iter()
                .filter_map(|k| Keyword::parse(k.as_ref()))
                .collect(),
            singleline_comment: None,
            block_comment: None,
            highlight_strings: false,
            highlight_numbers: false,
        }
    }

    pub fn with_singleline_comment(mut self, start: &str) -> Self {
        self.singleline_comment = marker(start);
        self
    }

    pub fn with_block_comment(mut self, start: &str, end: &str) -> Self {
        self.block_comment = marker(start).zip(marker(end));
        self
    }

    pub fn with_strings(mut self, on: bool) -> Self {
        self.highlight_strings = on;
        self
    }

    pub fn with_numbers(mut self, on: bool) -> Self {
        self.highlight_numbers = on;
        self
    }

    /// Does this profile apply to `filename`?
    ///
    /// Patterns starting with `.` must be a true suffix; other patterns match anywhere.
    pub fn matches(&self, filename: &str) -> bool {
        self.filematch.iter().any(|pat| {
            if pat.starts_with('.') {
                filename.ends_with(pat.as_str())
            } else {
                filename.contains(pat.as_str())
            }
        })
    }

    /// Longest keyword starting `rest` that is followed by a separator (or the end of line).
    fn keyword_at(&self, rest: &[u8]) -> Option<&Keyword> {
        self.keywords
            .iter()
            .filter(|k| {
                rest.starts_with(&k.word)
                    && rest.get(k.word.len()).map_or(true, |&b| is_separator(b))
            })
            .max_by_key(|k| k.word.len())
    }
}

/// The profiles compiled into the editor.
pub fn builtin_profiles() -> Vec<Profile> {
    const C_EXTENSIONS: &[&str] = &[".c", ".h", ".cpp", ".hpp", ".cc"];
    const C_KEYWORDS: &[&str] = &[
        // C
        "auto", "break", "case", "continue", "default", "do", "else", "enum", "extern", "for",
        "goto", "if", "register", "return", "sizeof", "static", "struct", "switch", "typedef",
        "union", "volatile", "while", "NULL",
        // C++
        "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "class", "compl",
        "constexpr", "const_cast", "decltype", "delete", "dynamic_cast", "explicit", "export",
        "false", "friend", "inline", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
        "nullptr", "operator", "or", "or_eq", "private", "protected", "public",
        "reinterpret_cast", "static_assert", "static_cast", "template", "this", "thread_local",
        "throw", "true", "try", "typeid", "typename", "virtual", "xor", "xor_eq",
        // types
        "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|",
        "short|", "const|", "bool|",
    ];
    const PY_EXTENSIONS: &[&str] = &[".py"];
    const PY_KEYWORDS: &[&str] = &[
        "def", "return", "lambda", "if", "elif", "else", "for", "while", "in", "import", "from",
        "class", "pass", "None", "True", "False",
    ];

    vec![
        Profile::new("C", C_EXTENSIONS, C_KEYWORDS)
            .with_singleline_comment("//")
            .with_block_comment("/*", "*/")
            .with_strings(true)
            .with_numbers(true),
        Profile::new("Python", PY_EXTENSIONS, PY_KEYWORDS)
            .with_singleline_comment("#")
            .with_strings(true)
            .with_numbers(true),
    ]
}

/// First profile in `profiles` that matches `filename`.
pub fn select<'a>(profiles: &'a [Profile], filename: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.matches(filename))
}

/// Classify one rendered line.
///
/// `in_comment` is the previous line's open-comment state. Returns the highlight classes (one per
/// byte of `render`) and whether the line ends inside a block comment.
pub fn highlight_line(
    render: &[u8],
    profile: Option<&Profile>,
    in_comment: bool,
) -> (Vec<Highlight>, bool) {
    let mut hl = vec![Highlight::Normal; render.len()];
    let Some(p) = profile else {
        return (hl, false);
    };

    let mut i = render.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = in_comment && p.block_comment.is_some();

    while i < render.len() {
        let rest = &render[i..];
        let b = render[i];

        if let Some(scs) = &p.singleline_comment {
            if prev_sep && rest.starts_with(scs) {
                hl[i..].fill(Highlight::Comment);
                break;
            }
        }

        if let Some((start, end)) = &p.block_comment {
            if in_comment {
                if rest.starts_with(end) {
                    hl[i..i + end.len()].fill(Highlight::MlComment);
                    i += end.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    hl[i] = Highlight::MlComment;
                    i += 1;
                    prev_sep = false;
                }
                continue;
            }
            if rest.starts_with(start) {
                hl[i..i + start.len()].fill(Highlight::MlComment);
                i += start.len();
                in_comment = true;
                prev_sep = false;
                continue;
            }
        }

        if let Some(quote) = in_string {
            hl[i] = Highlight::String;
            if b == b'\\' && i + 1 < render.len() {
                hl[i + 1] = Highlight::String;
                i += 2;
                prev_sep = false;
                continue;
            }
            if b == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }
        if p.highlight_strings && (b == b'"' || b == b'\'') {
            in_string = Some(b);
            hl[i] = Highlight::String;
            i += 1;
            prev_sep = false;
            continue;
        }

        if !is_print(b) {
            hl[i] = Highlight::NonPrintable;
            i += 1;
            prev_sep = false;
            continue;
        }

        if p.highlight_numbers {
            let after_number = i > 0 && hl[i - 1] == Highlight::Number;
            if (b.is_ascii_digit() && (prev_sep || after_number)) || (b == b'.' && after_number) {
                hl[i] = Highlight::Number;
                i += 1;
                prev_sep = false;
                continue;
            }
        }

        if prev_sep {
            if let Some(kw) = p.keyword_at(rest) {
                hl[i..i + kw.word.len()].fill(kw.class);
                i += kw.word.len();
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(b);
        i += 1;
    }

    (hl, in_comment)
}
