//! # pkguse Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach context to errors:
//! - **`ensure_dir_exists`**: `mkdir -p`, failing if the path is a file.
//! - **`read_file_to_string`**: reads a whole file.
//! - **`append_to_file`**: opens in append mode (creating it) and writes.
//! - **`remove_path_if_exists`**: `rm -rf` for a single file or directory.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_dir_exists(Path::new("/tmp/package.use"))?;
//! io::append_to_file(Path::new("/tmp/package.use/dev-lang"), "dev-lang/rust llvm\n")?;
//! ```
//!
use crate::core::error::{PkgUseError, Result};
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// Creates missing parents like `mkdir -p`. If the path already exists but
/// is not a directory, an error is returned.
///
/// # Errors
///
/// Returns an `Err` if the path is an existing non-directory or creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!("Path exists but is not a directory: {:?}", path);
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Appends `content` to the file at `path`, creating the file if needed.
///
/// Returns the raw `io::Error` so callers can wrap it in their own error type.
pub fn append_to_file(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    debug!("Appended {} bytes to {:?}", content.len(), path);
    Ok(())
}

/// Removes whatever exists at `path`: a file, a symlink, or a whole directory tree.
///
/// A missing path is not an error.
pub fn remove_path_if_exists(path: &Path) -> io::Result<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };
    if meta.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    info!("Removed existing {:?}", path);
    Ok(())
}

/// Checks that `name` can be used as a single entry directly under a directory.
pub fn validate_entry_name(name: &str) -> std::result::Result<(), PkgUseError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(PkgUseError::InvalidName {
            name: name.to_string(),
        }),
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_path_is_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file.txt");
        fs::write(&file_path, "hello")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Path exists but is not a directory"));
        Ok(())
    }

    #[test]
    fn test_read_file_not_found() -> Result<()> {
        let base_dir = tempdir()?;
        let result = read_file_to_string(&base_dir.path().join("nonexistent.txt"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_append_to_file_accumulates() -> Result<()> {
        let base_dir = tempdir()?;
        let path = base_dir.path().join("app-editors");
        append_to_file(&path, "app-editors/vim python\n")?;
        append_to_file(&path, "app-editors/emacs gtk\n")?;
        assert_eq!(
            read_file_to_string(&path)?,
            "app-editors/vim python\napp-editors/emacs gtk\n"
        );
        Ok(())
    }

    #[test]
    fn test_remove_path_if_exists() -> Result<()> {
        let base_dir = tempdir()?;

        let file = base_dir.path().join("package.use");
        fs::write(&file, "x")?;
        remove_path_if_exists(&file)?;
        assert!(!file.exists());

        let dir = base_dir.path().join("tree");
        fs::create_dir_all(dir.join("nested"))?;
        fs::write(dir.join("nested/file"), "x")?;
        remove_path_if_exists(&dir)?;
        assert!(!dir.exists());

        // Missing path is fine.
        remove_path_if_exists(&base_dir.path().join("missing"))?;
        Ok(())
    }

    #[test]
    fn test_validate_entry_name() {
        assert!(validate_entry_name("package.use").is_ok());
        assert!(validate_entry_name("packages.use").is_ok());
        assert!(validate_entry_name("").is_err());
        assert!(validate_entry_name(".").is_err());
        assert!(validate_entry_name("..").is_err());
        assert!(validate_entry_name("a/b").is_err());
        assert!(validate_entry_name("/etc").is_err());
        assert!(validate_entry_name("dir/").is_err());
    }
}
