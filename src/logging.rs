//! File-backed logger.
//!
//! The terminal is the game screen, so log output goes to
//! `~/.flapper/flapper.log` instead of stderr. `RUST_LOG` overrides the
//! default `info` filter.

use crate::core::constants::LOG_FILE;
use crate::utils::persistence::data_path;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

/// Initialize logging to the default log file. Returns the path in use.
pub fn init() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE)?;
    init_at(&path)?;
    Ok(path)
}

/// Initialize logging to an explicit file, appending.
pub fn init_at(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
