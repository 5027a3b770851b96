//! Tracing setup.
//!
//! The terminal belongs to the UI, so events are written to a log file in
//! the platform data directory instead of stdout.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Resolve the filter directive: explicit override, then `RUST_LOG`, then the
/// configured level.
pub fn filter(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(cli_level, env_level.as_deref(), config_level)
}

fn resolve_filter(cli_level: Option<&str>, env_level: Option<&str>, config_level: &str) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    }
    env_level
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_new(config_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber appending to `path`.
pub fn init(path: &Path, filter: EnvFilter) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
