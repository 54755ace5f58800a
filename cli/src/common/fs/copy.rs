//! # pkguse Filesystem Copy Operations
//!
//! File: cli/src/common/fs/copy.rs
//!
//! ## Overview
//!
//! Copying of the two output shapes to their destination:
//! - `copy_directory_recursive`: the category directory, via `fs_extra`.
//! - `copy_file`: the flat file, via `std::fs::copy`.
//!
//! Both wrap failures in `anyhow` errors carrying source and target.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Copies the contents of `source` into `target`, creating `target` if needed.
///
/// `target` ends up mirroring `source` (it is not nested as
/// `target/<source name>`). Existing files in `target` are overwritten.
///
/// # Errors
///
/// Returns an `Err` if `source` is not a readable directory or anything
/// below `target` cannot be created or written.
pub fn copy_directory_recursive(source: &Path, target: &Path) -> Result<()> {
    info!("Starting recursive copy from {:?} to {:?}", source, target);

    let mut options = fs_extra::dir::CopyOptions::new();
    options.overwrite = true;
    options.copy_inside = true;
    options.content_only = true;

    io::ensure_dir_exists(target)?;
    let copied = fs_extra::dir::copy(source, target, &options).map_err(|e| {
        anyhow::anyhow!(e).context(format!("Failed to copy dir {:?} to {:?}", source, target))
    })?;

    debug!("Copied {} bytes", copied);
    info!("Finished recursive copy from {:?} to {:?}", source, target);
    Ok(())
}

/// Copies a single file, replacing `target` if it exists.
pub fn copy_file(source: &Path, target: &Path) -> Result<()> {
    let copied = fs::copy(source, target)
        .with_context(|| format!("Failed to copy file {:?} to {:?}", source, target))?;
    debug!("Copied {} bytes from {:?} to {:?}", copied, source, target);
    Ok(())
}
