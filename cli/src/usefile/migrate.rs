//! # Flat File to Category Directory Migration
//!
//! File: cli/src/usefile/migrate.rs
//!
//! ## Overview
//!
//! Splits the flat file into one file per category and places the resulting
//! directory at `<tmp_root>/<name>`.
//!
//! ## Steps
//!
//! 1. Create a uniquely named working directory under the temp root,
//!    prefixed with the program name.
//! 2. Create `<workdir>/<name>`.
//! 3. Read the flat file and group its lines by category, keeping the
//!    original order within each category. Each group is appended to
//!    `<workdir>/<name>/<category>`.
//! 4. Remove whatever is already at `<tmp_root>/<name>`.
//! 5. Copy `<workdir>/<name>` to `<tmp_root>/<name>`.
//! 6. Remove the working directory.
//!
//! Each step maps its failure to its own `MigrationError` variant. If a step
//! fails, the working directory is still removed when it goes out of scope;
//! a half-written destination from step 5 is left as is.
//!
use crate::common::fs::{copy, io};
use crate::core::config::WorkPaths;
use crate::core::error::MigrationError;
use crate::usefile::category::category_of;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Lines of one category, newline terminated, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub lines: String,
}

/// Groups the lines of `content` by category.
///
/// Categories appear in order of first occurrence. Blank lines are skipped.
/// Every other line is kept byte for byte, terminator included, so a last
/// line without a newline stays without one.
///
/// # Errors
///
/// `MigrationError::InvalidLine` for a non-blank line without a usable
/// category (1-based line number).
pub fn group_by_category(content: &str) -> Result<Vec<CategoryGroup>, MigrationError> {
    let mut groups: Vec<CategoryGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (idx, raw) in content.split_inclusive('\n').enumerate() {
        let line = raw.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        let category = category_of(line).ok_or_else(|| MigrationError::InvalidLine {
            line_no: idx + 1,
            line: line.to_string(),
        })?;

        let slot = *index.entry(category.to_string()).or_insert_with(|| {
            groups.push(CategoryGroup {
                category: category.to_string(),
                lines: String::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.lines.push_str(raw);
    }

    Ok(groups)
}

/// Migrates the flat file into the category directory `<tmp_root>/<name>`.
///
/// `name` must be a single path component; callers validate it.
/// Returns the destination path.
pub fn migrate_to_dir(name: &str, paths: &WorkPaths) -> Result<PathBuf, MigrationError> {
    let workdir = tempfile::Builder::new()
        .prefix(&paths.program)
        .tempdir_in(&paths.tmp_root)
        .map_err(|source| MigrationError::CreateDir {
            path: paths.tmp_root.clone(),
            source,
        })?;
    debug!("Working directory: {:?}", workdir.path());

    let staged = workdir.path().join(name);
    fs::create_dir(&staged).map_err(|source| MigrationError::CreateDir {
        path: staged.clone(),
        source,
    })?;

    let flat_file = paths.flat_file();
    let content = fs::read_to_string(&flat_file).map_err(|source| MigrationError::SourceRead {
        path: flat_file.clone(),
        source,
    })?;

    let groups = group_by_category(&content)?;
    for group in &groups {
        let category_file = staged.join(&group.category);
        io::append_to_file(&category_file, &group.lines).map_err(|source| {
            MigrationError::WriteCategory {
                path: category_file.clone(),
                source,
            }
        })?;
    }
    info!(
        "Split {:?} into {} category files",
        flat_file,
        groups.len()
    );

    let destination = paths.destination(name);
    io::remove_path_if_exists(&destination).map_err(|source| {
        MigrationError::RemoveDestination {
            path: destination.clone(),
            source,
        }
    })?;

    copy::copy_directory_recursive(&staged, &destination).map_err(|source| {
        MigrationError::Copy {
            from: staged.clone(),
            to: destination.clone(),
            source,
        }
    })?;

    let workdir_path = workdir.path().to_path_buf();
    workdir
        .close()
        .map_err(|source| MigrationError::Cleanup {
            path: workdir_path,
            source,
        })?;

    Ok(destination)
}
