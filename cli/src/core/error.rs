//! # pkguse Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Error types shared across the crate. Library routines never terminate the
//! process; they return one of these and `main` decides how to report it and
//! which exit code to use.
//!
//! ## Architecture
//!
//! - `PkgUseError`: user-facing failures (bad arguments, missing source,
//!   configuration problems, a directory that could not be saved).
//! - `MigrationError`: the individual steps of splitting the flat file into a
//!   category directory. It is carried as the `source` of
//!   `PkgUseError::NotSaved`.
//! - `Result<T>`: alias for `anyhow::Result<T>`, so plain I/O failures can be
//!   propagated with `.context(...)`.
//!
//! ## Examples
//!
//! ```rust
//! // Pattern matching on error types after propagation through anyhow
//! match result {
//!     Err(e) if e.downcast_ref::<PkgUseError>().is_some_and(PkgUseError::is_usage) => {
//!         println!("{}", e);
//!     }
//!     other => other?,
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for a successful run.
pub const EXIT_OK: i32 = 0;
/// Exit code for usage errors: bad arguments or a missing source path.
pub const EXIT_USAGE: i32 = 1;
/// Exit code for filesystem and any other unexpected failure.
pub const EXIT_FAILURE: i32 = 2;

/// Custom error type for the pkguse application.
#[derive(Error, Debug)]
pub enum PkgUseError {
    /// The `--output-as` value was not one of the accepted spellings.
    #[error("{hint}")]
    Usage { hint: String },

    /// The file or directory to scan does not exist.
    #[error("failure: {} no file or directory", path.display())]
    NotFound { path: PathBuf },

    /// The output name cannot be used as a single entry under the temp root.
    #[error("invalid output name '{name}': must be a single file or directory name")]
    InvalidName { name: String },

    /// The source is one of the work files the collector is about to rewrite.
    #[error("source {} is a work file of this run", path.display())]
    SourceIsWorkFile { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration into a category directory failed. The message stays generic;
    /// the concrete step is available through `source`.
    #[error("unknown error, {name} not saved")]
    NotSaved {
        name: String,
        #[source]
        source: MigrationError,
    },
}

impl PkgUseError {
    /// Returns true for errors caused by how the tool was invoked.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            PkgUseError::Usage { .. }
                | PkgUseError::NotFound { .. }
                | PkgUseError::InvalidName { .. }
                | PkgUseError::SourceIsWorkFile { .. }
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }
}

/// Failures of the individual migration steps.
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("failed to read flat file {}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_no} has no category: {line:?}")]
    InvalidLine { line_no: usize, line: String },

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write category file {}", path.display())]
    WriteCategory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove existing destination {}", path.display())]
    RemoveDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to remove working directory {}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

/// Maps any error that reached `main` to a process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PkgUseError>()
        .map_or(EXIT_FAILURE, PkgUseError::exit_code)
}
