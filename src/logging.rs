// Logging module: every diagnostic line goes to an append-only file in
// the working directory. Stdout stays reserved for the user-facing result.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target, WriteStyle};

pub const LOG_FILE: &str = "error.log";

/// Open `path` for appending (creating it if needed) and install it as
/// the global logger target. `RUST_LOG` overrides the default `info` level.
pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .format_timestamp_secs()
        .try_init()
        .context("Failed to install logger")?;
    Ok(())
}
