//! # pkguse Logging Setup
//!
//! File: cli/src/core/logging.rs
//!
//! ## Overview
//!
//! Chooses the log file and installs the global `tracing` subscriber.
//!
//! ## Architecture
//!
//! - `default_log_path`: `/var/log/<prog>.log` for root, `/tmp/<prog>.log`
//!   otherwise. Computed once in `main` and handed to `init_logger`.
//! - `init_logger`: opens the explicit `Options::logfile` or the default path
//!   in append mode and installs two `fmt` layers:
//!   - the log file, plain text, `info` and above;
//!   - stderr, compact, level from `-v` count unless `RUST_LOG` is set.
//!
//! After initialization the rest of the crate logs with `tracing::info!` and
//! `tracing::error!`.
//!
use crate::common::system::Privilege;
use crate::core::config::Options;
use crate::core::error::Result;
use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Log directory used when running as root.
pub const SYSTEM_LOG_DIR: &str = "/var/log";
/// Log directory used for unprivileged runs.
pub const USER_LOG_DIR: &str = "/tmp";

/// Default log file for the given privilege level and program base name.
pub fn default_log_path(privilege: Privilege, program: &str) -> PathBuf {
    let dir = match privilege {
        Privilege::Root => SYSTEM_LOG_DIR,
        Privilege::User => USER_LOG_DIR,
    };
    Path::new(dir).join(format!("{}.log", program))
}

/// The log file actually used: the explicit option wins over the default.
pub fn resolve_log_path(options: &Options, default_log: &Path) -> PathBuf {
    options
        .logfile
        .clone()
        .unwrap_or_else(|| default_log.to_path_buf())
}

/// Opens a log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))
}

/// Maps the `-v` count to a stderr filter directive.
pub fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber and returns the path of the log file.
///
/// # Errors
///
/// Returns an `Err` if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logger(options: &Options, default_log: &Path, verbose: u8) -> Result<PathBuf> {
    let path = resolve_log_path(options, default_log);
    let file = open_log_file(&path)?;

    let stderr_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose)));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_filter(LevelFilter::INFO);
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(stderr_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install logger")?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_log_path_root() {
        assert_eq!(
            default_log_path(Privilege::Root, "pkguse"),
            PathBuf::from("/var/log/pkguse.log")
        );
    }

    #[test]
    fn test_default_log_path_user() {
        assert_eq!(
            default_log_path(Privilege::User, "genuse"),
            PathBuf::from("/tmp/genuse.log")
        );
    }

    #[test]
    fn test_resolve_log_path_prefers_option() {
        let default_log = PathBuf::from("/tmp/pkguse.log");
        let mut options = Options::default();
        assert_eq!(resolve_log_path(&options, &default_log), default_log);

        options.logfile = Some(PathBuf::from("/home/me/pkguse.log"));
        assert_eq!(
            resolve_log_path(&options, &default_log),
            PathBuf::from("/home/me/pkguse.log")
        );
    }

    #[test]
    fn test_open_log_file_appends() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("pkguse.log");

        writeln!(open_log_file(&path)?, "first")?;
        writeln!(open_log_file(&path)?, "second")?;

        assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\n");
        Ok(())
    }

    #[test]
    fn test_open_log_file_missing_dir() -> Result<()> {
        let dir = tempdir()?;
        let result = open_log_file(&dir.path().join("missing/pkguse.log"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(9), "trace");
    }
}
