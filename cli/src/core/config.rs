//! # pkguse Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! Loads the optional TOML configuration file and holds the runtime values
//! derived from it: the `Options` record read by the save routines and the
//! `WorkPaths` that locate the flat file, the comment side file and the
//! destination of saved output.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (applied by the `save` command)
//! 2. The config file: `--config <path>` / `PKGUSE_CONFIG`, or
//!    `<config_dir>/pkguse/config.toml` when not given
//! 3. Default values defined in the code
//!
//! A missing default config file is fine. A missing explicitly named one is
//! an error.
//!
//! ## Examples
//!
//! ```toml
//! logfile = "~/pkguse.log"
//! output_as = "dir"
//! tmp_root = "/tmp"
//! ```
//!
use crate::common::fs::io::validate_entry_name;
use crate::core::error::{PkgUseError, Result};
use crate::usefile::mode::{OutputMode, OUTPUT_AS_HINT};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Temp root used when neither the config file nor `--tmp-root` sets one.
pub const DEFAULT_TMP_ROOT: &str = "/tmp";

const CONFIG_FILENAME: &str = "config.toml";

/// Contents of `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Log file overriding the privilege-based default (can use ~).
    pub logfile: Option<String>,
    /// Output mode, same spellings as `--output-as`.
    pub output_as: Option<String>,
    /// Directory holding the flat file and the saved output (can use ~).
    pub tmp_root: Option<String>,
}

/// Options consumed by the logger and the save routines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Options {
    /// Explicit log file. `None` means the default log path is used.
    pub logfile: Option<PathBuf>,
    /// Shape of the saved result.
    pub output_as: OutputMode,
}

impl Options {
    /// Builds the base options from a loaded config file.
    ///
    /// The file has already been validated, so an unparsable `output_as`
    /// is reported as a configuration error rather than a usage error.
    pub fn from_file_config(cfg: &FileConfig) -> Result<Self> {
        let output_as = match cfg.output_as.as_deref() {
            Some(raw) => OutputMode::from_arg(raw).ok_or_else(|| {
                anyhow!(PkgUseError::Config(format!(
                    "invalid output_as '{}': {}",
                    raw, OUTPUT_AS_HINT
                )))
            })?,
            None => OutputMode::default(),
        };
        Ok(Self {
            logfile: cfg.logfile.as_ref().map(PathBuf::from),
            output_as,
        })
    }
}

/// Paths of the transient files for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkPaths {
    /// Root under which everything is written.
    pub tmp_root: PathBuf,
    /// Base name of the running program, used to name files and directories.
    pub program: String,
}

impl WorkPaths {
    pub fn new(tmp_root: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            tmp_root: tmp_root.into(),
            program: program.into(),
        }
    }

    /// The well-known flat file collecting one entry per line.
    pub fn flat_file(&self) -> PathBuf {
        self.tmp_root.join(format!("{}.tmp", self.program))
    }

    /// Side file receiving full-line comments found while collecting.
    pub fn comment_file(&self) -> PathBuf {
        self.tmp_root.join(format!("{}.comments", self.program))
    }

    /// Final location of a saved file or directory called `name`.
    pub fn destination(&self, name: &str) -> PathBuf {
        self.tmp_root.join(name)
    }

    /// Checks that `name` is a single entry that does not land on the flat
    /// file or the comment file, which share the temp root with the output.
    pub fn check_output_name(&self, name: &str) -> std::result::Result<(), PkgUseError> {
        validate_entry_name(name)?;
        let destination = self.destination(name);
        if destination == self.flat_file() || destination == self.comment_file() {
            return Err(PkgUseError::InvalidName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

/// Loads the configuration file.
///
/// # Arguments
///
/// * `explicit` - Path given via `--config` / `PKGUSE_CONFIG`. When `None`,
///   the user config directory is searched instead.
///
/// # Errors
///
/// Returns an `Err` if an explicit file is missing, if a file exists but
/// cannot be read or parsed, or if validation fails.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig> {
    let mut config = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(anyhow!(PkgUseError::Config(format!(
                    "config file '{}' does not exist",
                    path.display()
                ))));
            }
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => load_user_config()?.unwrap_or_default(),
    };
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<FileConfig>> {
    let Some(proj_dirs) = ProjectDirs::from("org", "pkguse", "pkguse") else {
        debug!("Could not determine user config directory.");
        return Ok(None);
    };
    let config_path = proj_dirs.config_dir().join(CONFIG_FILENAME);
    if config_path.is_file() {
        info!("Loading user configuration from: {}", config_path.display());
        load_config_from_path(&config_path).map(Some)
    } else {
        debug!(
            "User configuration file not found at {}",
            config_path.display()
        );
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut FileConfig) {
    if let Some(logfile) = config.logfile.as_mut() {
        *logfile = shellexpand::tilde(logfile.as_str()).into_owned();
        debug!("Expanded logfile: {}", logfile);
    }
    if let Some(tmp_root) = config.tmp_root.as_mut() {
        *tmp_root = shellexpand::tilde(tmp_root.as_str()).into_owned();
        debug!("Expanded tmp_root: {}", tmp_root);
    }
}

fn validate_config(config: &FileConfig) -> Result<()> {
    if let Some(raw) = config.output_as.as_deref() {
        if OutputMode::from_arg(raw).is_none() {
            return Err(anyhow!(PkgUseError::Config(format!(
                "invalid output_as '{}': {}",
                raw, OUTPUT_AS_HINT
            ))));
        }
    }
    if let Some(logfile) = config.logfile.as_deref() {
        if logfile.is_empty() {
            return Err(anyhow!(PkgUseError::Config(
                "logfile cannot be empty".to_string()
            )));
        }
    }
    Ok(())
}

/// Checks that a temp root exists and is a directory.
///
/// Only the effective root is checked, after flags and environment have
/// been applied; a `tmp_root` in the config file that gets overridden is
/// never looked at.
pub fn validate_tmp_root(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(anyhow!(PkgUseError::Config(format!(
            "tmp_root '{}' is not an existing directory",
            path.display()
        ))));
    }
    Ok(())
}
