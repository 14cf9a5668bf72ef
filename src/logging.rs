//! Tracing subscriber setup.
//!
//! The terminal is in raw mode while the editor runs, so logs go to a file: set `LPAD_LOG` to
//! a path to enable them. `RUST_LOG` filters as usual (default `info`).

use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "LPAD_LOG";

/// Install the global subscriber if `LPAD_LOG` is set; otherwise logging stays off.
pub fn init() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("Creating log file {}", path.to_string_lossy()))?;
    build_subscriber(file)
        .try_init()
        .context("Installing tracing subscriber")?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "lpad starting");
    Ok(())
}

/// File logger filtered by `RUST_LOG`.
fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_ansi(false).with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
