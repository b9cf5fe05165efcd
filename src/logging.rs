//! File logging
//!
//! The terminal is owned by the UI, so log records go to a file instead of
//! stderr. `RUST_LOG` overrides the level from the config.

use crate::config::Config;
use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Initialize the global logger, appending to `path`
pub fn init(config: &Config, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_target(false)
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
