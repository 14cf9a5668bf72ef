//! `lpad`: a small terminal text editor with syntax highlighting.
//!
//! ## Reading guide
//! - **`buffer::Buffer`**: the lines of the file, each with its rendered form and highlight.
//! - **`syntax`**: language profiles and the per-line classifier.
//! - **`viewport::ViewPort`**: window size, scroll offset, cursor and cursor movement.
//! - **`compositor`**: builds one terminal frame from the three above.
//! - **`editor::Editor`**: application state and key handling; owned by the loop in `run()`.

mod buffer;
mod compositor;
mod config;
mod editor;
mod keys;
mod logging;
mod syntax;
mod terminal;
mod types;
mod utils;
mod viewport;

use anyhow::Result;
use config::Config;
use crossterm::event::{self, Event};
use editor::Editor;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use terminal::TerminalGuard;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

/// Runs the editor:
/// - parses command line arguments, starts logging and reads the config
/// - sets up the terminal (raw mode + alternate screen)
/// - loops: render → read input events → update state
fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut file_to_open = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "-h" | "--help" => {
                println!("lpad - a small terminal text editor");
                println!();
                println!("USAGE:");
                println!("    lpad [FILE]          Open a file (created on first save)");
                println!("    lpad -h, --help      Show this help message");
                println!("    lpad -v, --version   Show version information");
                println!();
                println!("KEYBINDINGS:");
                println!("    C-s                  Save");
                println!("    C-q                  Quit");
                println!("    C-l                  Open file");
                println!("    C-y                  Find");
                println!("    C-k                  Kill line");
                println!("    C-f C-b C-n C-p      Move (or the arrow keys)");
                println!("    C-a C-e              Line start / end (or Home / End)");
                println!();
                println!("Set {}=<file> to write a log.", logging::LOG_ENV);
                return Ok(());
            }
            "-v" | "--version" => {
                println!("lpad v{}", env!("CARGO_PKG_VERSION"));
                return Ok(());
            }
            path if path.starts_with('-') => {
                eprintln!("Error: Unknown flag '{path}'");
                eprintln!("Try 'lpad --help' for more information.");
                std::process::exit(1);
            }
            path => {
                file_to_open = Some(PathBuf::from(path));
            }
        }
    }

    logging::init()?;
    let config = Config::load()?;

    let mut stdout = io::stdout();
    let _term = TerminalGuard::new(&mut stdout)?;

    let (rows, cols) = terminal::window_size()?;
    let mut editor = Editor::new(&config, rows, cols);
    if let Some(path) = file_to_open {
        editor.open(&path)?;
    }

    // Poll so time-based UI (message expiry) updates without input.
    loop {
        editor.render(&mut stdout)?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(ev) => {
                    if let Some(key) = keys::from_event(&ev) {
                        if editor.process(key)? {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    let (rows, cols) = terminal::window_size()?;
                    editor.on_resize(rows, cols);
                }
                _ => {}
            }
        } else {
            editor.tick(Instant::now());
        }
    }

    Ok(())
}
