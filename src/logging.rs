//! Tracing setup
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr. The filter comes from `BLOGLINE_LOG_LEVEL` (EnvFilter syntax);
//! without it the level is `warn`, or `debug` with `--verbose`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{filter::Directive, fmt::time::ChronoLocal, EnvFilter};

pub const LOG_LEVEL_ENV_VAR: &str = "BLOGLINE_LOG_LEVEL";

pub const LOG_PATH_ENV_VAR: &str = "BLOGLINE_LOG_PATH";

pub const DEFAULT_LOG_PATH: &str = "~/.blogline/blogline.log";

// Dependencies that are chatty at debug level
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls", "tokio", "h2"];

/// Log file path from the environment or the default, with `~` expanded
pub fn get_log_path() -> PathBuf {
    let raw = std::env::var_os(LOG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());
    PathBuf::from(shellexpand::tilde(&raw).into_owned())
}

fn build_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    QUIET_TARGETS
        .iter()
        .filter_map(|target| format!("{target}=warn").parse::<Directive>().ok())
        .fold(filter, EnvFilter::add_directive)
}

/// Install the global subscriber writing to the log file; returns its path
pub fn init(verbose: bool) -> Result<PathBuf> {
    let path = get_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    Ok(path)
}
