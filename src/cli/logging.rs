//! Tracing setup. Logs never go to stdout: command output owns it, and the
//! terminal browser owns the screen.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use super::app::LogLevel;

/// `--log-level` wins; otherwise `RUST_LOG`, otherwise warn
fn build_filter(log_level: Option<LogLevel>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level.to_filter_directive()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    }
}

/// Log to stderr, for the non-interactive commands
pub fn init_stderr(log_level: Option<LogLevel>) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Open the first usable log file among `candidates`, creating parent dirs.
/// Also returns why each earlier candidate was skipped.
pub fn open_log_file(candidates: &[PathBuf]) -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut skipped = Vec::new();
    for path in candidates {
        let opened = path
            .parent()
            .map_or(Ok(()), std::fs::create_dir_all)
            .and_then(|_| OpenOptions::new().create(true).append(true).open(path));
        match opened {
            Ok(file) => return (Some((path.clone(), file)), skipped),
            Err(e) => skipped.push(format!("{}: {}", path.display(), e)),
        }
    }
    (None, skipped)
}

/// Log to a file, for the terminal browser. When no candidate can be opened
/// events are discarded and the browser still starts.
pub fn init_file(log_level: Option<LogLevel>, candidates: &[PathBuf]) -> Option<PathBuf> {
    let (opened, skipped) = open_log_file(candidates);
    let (path, writer) = match opened {
        Some((path, file)) => (Some(path), BoxMakeWriter::new(Mutex::new(file))),
        None => (None, BoxMakeWriter::new(std::io::sink)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_ansi(false)
        .with_writer(writer)
        .try_init()
        .ok();

    for reason in &skipped {
        tracing::warn!("Skipped log location {}", reason);
    }
    match &path {
        Some(path) => tracing::info!("Logging to {}", path.display()),
        None => tracing::debug!("No writable log location, discarding log output"),
    }
    path
}
