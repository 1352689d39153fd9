use anyhow::{Context, Result};
use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Default log level when RUST_LOG is unset
const DEFAULT_FILTER: &str = "warn";

/// Default log file (`<data dir>/pomotodo/pomotodo.log`)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("pomotodo").join("pomotodo.log"))
}

/// Initialise the logger, writing to a file so records don't
/// draw over the terminal UI.
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialised")?;

    Ok(())
}
