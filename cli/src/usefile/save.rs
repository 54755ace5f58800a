//! Saving the collected entries as a file or as a category directory.
//!
//! Both routines return `Ok(None)` when the options select the other mode,
//! so the caller can run them one after the other and stop at the first
//! `Some`.

use crate::common::fs::copy;
use crate::core::config::{Options, WorkPaths};
use crate::core::error::{PkgUseError, Result};
use crate::usefile::migrate::migrate_to_dir;
use crate::usefile::mode::OutputMode;
use anyhow::Context;
use std::path::PathBuf;
use tracing::info;

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
    /// Where the output was written.
    pub path: PathBuf,
    /// Message already logged, for the caller to print.
    pub message: String,
}

/// Copies the flat file to `<tmp_root>/<file>` unless the mode is `Dir`.
///
/// # Errors
///
/// `PkgUseError::InvalidName` for a `file` that is not a single entry name
/// or that names the flat file or comment file, or an I/O error if the
/// copy fails.
pub fn save_as_file(options: &Options, file: &str, paths: &WorkPaths) -> Result<Option<Saved>> {
    if options.output_as == OutputMode::Dir {
        return Ok(None);
    }
    paths.check_output_name(file)?;

    let destination = paths.destination(file);
    copy::copy_file(&paths.flat_file(), &destination)
        .with_context(|| format!("{} not saved", file))?;

    let message = format!(
        "new packages.use is saved as File to: {}",
        destination.display()
    );
    info!("{}", message);
    Ok(Some(Saved {
        path: destination,
        message,
    }))
}

/// Migrates the flat file into `<tmp_root>/<directory>` when the mode is `Dir`.
///
/// # Errors
///
/// `PkgUseError::InvalidName` for a bad `directory` (see `save_as_file`), or
/// `PkgUseError::NotSaved` wrapping the failed migration step.
pub fn save_as_directory(
    options: &Options,
    directory: &str,
    paths: &WorkPaths,
) -> Result<Option<Saved>> {
    if options.output_as != OutputMode::Dir {
        return Ok(None);
    }
    paths.check_output_name(directory)?;

    // Logged once by the caller, together with the migration step.
    let destination =
        migrate_to_dir(directory, paths).map_err(|source| PkgUseError::NotSaved {
            name: directory.to_string(),
            source,
        })?;

    let message = format!(
        "new {} is saved as directory to: {}",
        directory,
        destination.display()
    );
    info!("{}", message);
    Ok(Some(Saved {
        path: destination,
        message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn options(mode: OutputMode) -> Options {
        Options {
            output_as: mode,
            ..Default::default()
        }
    }

    #[test]
    fn test_save_as_file_copies_flat_file() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");
        fs::write(paths.flat_file(), "dev-lang/rust llvm\n")?;

        let saved = save_as_file(&options(OutputMode::File), "package.use", &paths)?
            .expect("file mode saves");

        assert_eq!(saved.path, root.path().join("package.use"));
        assert_eq!(fs::read_to_string(&saved.path)?, "dev-lang/rust llvm\n");
        assert!(saved.message.starts_with("new packages.use is saved as File to: "));
        Ok(())
    }

    #[test]
    fn test_save_as_file_is_noop_in_dir_mode() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");
        fs::write(paths.flat_file(), "dev-lang/rust llvm\n")?;

        let saved = save_as_file(&options(OutputMode::Dir), "package.use", &paths)?;

        assert!(saved.is_none());
        assert!(!root.path().join("package.use").exists());
        Ok(())
    }

    #[test]
    fn test_save_as_directory_is_noop_in_file_mode() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");

        assert!(save_as_directory(&options(OutputMode::File), "package.use", &paths)?.is_none());
        Ok(())
    }

    #[test]
    fn test_save_as_directory_end_to_end() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");
        fs::write(
            paths.flat_file(),
            "cat1/pkg1 -flag\ncat1/pkg2 -flag\ncat2/pkgX\n",
        )?;

        let saved = save_as_directory(&options(OutputMode::Dir), "packages.use", &paths)?
            .expect("dir mode saves");

        let dest = root.path().join("packages.use");
        assert_eq!(saved.path, dest);
        assert_eq!(
            saved.message,
            format!("new packages.use is saved as directory to: {}", dest.display())
        );
        assert_eq!(fs::read_dir(&dest)?.count(), 2);
        Ok(())
    }

    #[test]
    fn test_save_as_directory_missing_flat_file() {
        let root = tempdir().unwrap();
        let paths = WorkPaths::new(root.path(), "pkguse");

        let err = save_as_directory(&options(OutputMode::Dir), "package.use", &paths).unwrap_err();

        assert_eq!(err.to_string(), "unknown error, package.use not saved");
        let pkg_err = err.downcast_ref::<PkgUseError>().unwrap();
        assert!(!pkg_err.is_usage());
    }

    #[test]
    fn test_save_as_file_keeps_flat_file_intact() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");
        fs::write(paths.flat_file(), "dev-lang/rust llvm\n")?;

        let err = save_as_file(&options(OutputMode::File), "pkguse.tmp", &paths).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PkgUseError>(),
            Some(PkgUseError::InvalidName { .. })
        ));
        assert_eq!(fs::read_to_string(paths.flat_file())?, "dev-lang/rust llvm\n");
        Ok(())
    }

    #[test]
    fn test_save_as_directory_keeps_work_files_intact() -> Result<()> {
        let root = tempdir()?;
        let paths = WorkPaths::new(root.path(), "pkguse");
        fs::write(paths.flat_file(), "dev-lang/rust llvm\n")?;
        fs::write(paths.comment_file(), "toolchain\n")?;

        for name in ["pkguse.tmp", "pkguse.comments"] {
            let err = save_as_directory(&options(OutputMode::Dir), name, &paths).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<PkgUseError>(),
                Some(PkgUseError::InvalidName { .. })
            ));
        }
        assert_eq!(fs::read_to_string(paths.flat_file())?, "dev-lang/rust llvm\n");
        assert_eq!(fs::read_to_string(paths.comment_file())?, "toolchain\n");
        Ok(())
    }

    #[test]
    fn test_invalid_names_rejected() {
        let root = tempdir().unwrap();
        let paths = WorkPaths::new(root.path(), "pkguse");

        for mode in [OutputMode::File, OutputMode::Dir] {
            let result = match mode {
                OutputMode::File => save_as_file(&options(mode), "../escape", &paths),
                OutputMode::Dir => save_as_directory(&options(mode), "../escape", &paths),
            };
            let err = result.unwrap_err();
            assert!(matches!(
                err.downcast_ref::<PkgUseError>(),
                Some(PkgUseError::InvalidName { .. })
            ));
        }
    }
}
