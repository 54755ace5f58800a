//! # pkguse Save Command
//!
//! File: cli/src/commands/save.rs
//!
//! ## Overview
//!
//! `pkguse save [SOURCE]` collects the entries of a package.use file or
//! directory and saves them under the temp root, either as one file or as a
//! directory with one file per category.
//!
//! ## Usage
//!
//! ```bash
//! # Collect /etc/portage/package.use and save it as /tmp/package.use
//! pkguse save
//!
//! # Split into /tmp/packages.use/<category>
//! pkguse save /etc/portage/package.use -o dir -n packages.use
//! ```
//!
//! The command processing flow:
//! 1. Load the config file and build `Options` (flags override the file)
//! 2. Parse the output mode and check the output name
//! 3. Initialize logging
//! 4. Check the source and collect it into the flat file
//! 5. Save as file, or save as directory
//!
use crate::core::config::{self, Options, WorkPaths, DEFAULT_TMP_ROOT};
use crate::core::error::Result;
use crate::core::logging;
use crate::usefile::mode;
use crate::usefile::save::{self, Saved};
use crate::usefile::scan::{check_file_or_directory, FlatFileCollector};
use anyhow::anyhow;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Source scanned when none is given.
pub const DEFAULT_SOURCE: &str = "/etc/portage/package.use";
/// Name of the saved file or directory when none is given.
pub const DEFAULT_NAME: &str = "package.use";

/// Arguments for `pkguse save`.
#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// package.use file or directory to collect entries from.
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Save as a single file [f | file] or as a directory [d | dir].
    #[arg(short, long, value_name = "MODE")]
    pub output_as: Option<String>,

    /// Name of the saved file or directory under the temp root.
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Log file to use instead of the default one.
    #[arg(short, long, value_name = "PATH")]
    pub logfile: Option<PathBuf>,

    /// Directory receiving the flat file and the saved output.
    #[arg(long, env = "PKGUSE_TMP_ROOT", value_name = "DIR")]
    pub tmp_root: Option<PathBuf>,
}

/// Values computed once in `main` before any command runs.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Base name the program was invoked as.
    pub program: String,
    /// Log file used when neither flags nor config name one.
    pub default_log: PathBuf,
    /// `-v` count.
    pub verbose: u8,
    /// Explicit config file (`--config` / `PKGUSE_CONFIG`).
    pub config: Option<PathBuf>,
}

/// Main handler for `pkguse save`.
///
/// # Errors
///
/// Usage errors (`PkgUseError::Usage`, `NotFound`, `InvalidName`) and any
/// configuration, logging or filesystem failure.
pub fn handle_save(args: SaveArgs, ctx: &RunContext) -> Result<Saved> {
    let file_config = config::load_config(ctx.config.as_deref())?;
    let mut options = Options::from_file_config(&file_config)?;
    if let Some(logfile) = args.logfile {
        options.logfile = Some(logfile);
    }
    if let Some(raw) = args.output_as.as_deref() {
        mode::output_as(raw, &mut options)?;
    }

    let tmp_root = args
        .tmp_root
        .or_else(|| file_config.tmp_root.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TMP_ROOT));
    let paths = WorkPaths::new(tmp_root, ctx.program.as_str());
    paths.check_output_name(&args.name)?;
    config::validate_tmp_root(&paths.tmp_root)?;

    let log_path = logging::init_logger(&options, &ctx.default_log, ctx.verbose)?;
    debug!("Logging to {:?}", log_path);
    info!(
        "Saving {:?} as {} '{}' under {:?}",
        args.source, options.output_as, args.name, paths.tmp_root
    );

    let collector = FlatFileCollector::new(paths.clone());
    check_file_or_directory(&args.source, &options, &collector)?;

    if let Some(saved) = save::save_as_file(&options, &args.name, &paths)? {
        return Ok(saved);
    }
    save::save_as_directory(&options, &args.name, &paths)?
        .ok_or_else(|| anyhow!("no output mode selected for {}", args.name))
}
