//! User configuration: `lpad.toml`.
//!
//! Looked up in the current directory first, then next to the executable. Every key is
//! optional; a missing file means defaults.
//!
//! ```toml
//! message_timeout_secs = 2
//! quit_times = 2
//! max_line_columns = 32768
//!
//! [[profiles]]
//! name = "Rust"
//! filematch = [".rs"]
//! keywords = ["fn", "let", "match"]
//! types = ["u8", "usize"]
//! singleline_comment = "//"
//! multiline_comment_start = "/*"
//! multiline_comment_end = "*/"
//! highlight_strings = true
//! highlight_numbers = true
//! ```

use crate::buffer::DEFAULT_MAX_LINE_COLUMNS;
use crate::syntax::{self, Profile};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const CONFIG_FILE: &str = "lpad.toml";

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub message_timeout_secs: u64,
    /// Extra `C-q` presses needed to quit with unsaved changes.
    pub quit_times: u32,
    /// Widest rendered line accepted before the editor gives up.
    pub max_line_columns: usize,
    profiles: Vec<ProfileConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            message_timeout_secs: 2,
            quit_times: 2,
            max_line_columns: DEFAULT_MAX_LINE_COLUMNS,
            profiles: Vec::new(),
        }
    }
}

/// A `[[profiles]]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProfileConfig {
    name: String,
    #[serde(default)]
    filematch: Vec<String>,
    #[serde(default)]
    keywords: Vec<String>,
    /// Type-like keywords, highlighted in the second keyword color.
    #[serde(default)]
    types: Vec<String>,
    singleline_comment: Option<String>,
    multiline_comment_start: Option<String>,
    multiline_comment_end: Option<String>,
    #[serde(default)]
    highlight_strings: bool,
    #[serde(default)]
    highlight_numbers: bool,
}

impl ProfileConfig {
    fn to_profile(&self) -> Profile {
        let keywords: Vec<String> = self
            .keywords
            .iter()
            .cloned()
            .chain(self.types.iter().map(|t| format!("{t}|")))
            .collect();
        let mut profile = Profile::new(self.name.as_str(), &self.filematch, &keywords)
            .with_strings(self.highlight_strings)
            .with_numbers(self.highlight_numbers);
        if let Some(start) = &self.singleline_comment {
            profile = profile.with_singleline_comment(start);
        }
        match (&self.multiline_comment_start, &self.multiline_comment_end) {
            (Some(start), Some(end)) => profile = profile.with_block_comment(start, end),
            (None, None) => {}
            _ => warn!(
                profile = %self.name,
                "block comments need both a start and an end marker; ignoring"
            ),
        }
        profile
    }
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load the first config file found in the default locations.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_paths())
    }

    /// Load the first of `paths` that exists; defaults when none does.
    pub fn load_from(paths: &[PathBuf]) -> Result<Self> {
        for path in paths {
            if path.is_file() {
                return Self::load_file(path);
            }
        }
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
        let config =
            Self::parse(&text).with_context(|| format!("Parsing {}", path.display()))?;
        info!(path = %path.display(), profiles = config.profiles.len(), "loaded config");
        Ok(config)
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }

    /// User profiles followed by the built-in ones, in lookup order.
    pub fn profiles(&self) -> Vec<Profile> {
        self.profiles
            .iter()
            .map(ProfileConfig::to_profile)
            .chain(syntax::builtin_profiles())
            .collect()
    }
}

/// Where to look for `lpad.toml`.
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(CONFIG_FILE));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            paths.push(dir.join(CONFIG_FILE));
        }
    }

    paths
}
