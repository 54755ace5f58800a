//! # pkguse Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers used by the collector and the save routines.
//!
//! - **`copy`**: recursive directory copy through `fs_extra`, single file copy.
//! - **`io`**: directory creation, reading, appending, removal and entry-name checks.
//!
//! Import from the submodule directly, e.g. `crate::common::fs::io::append_to_file`.
//!

/// Copying files and directories (`copy_directory_recursive`, `copy_file`).
pub mod copy;
/// Basic file I/O (`ensure_dir_exists`, `append_to_file`, `remove_path_if_exists`).
pub mod io;
