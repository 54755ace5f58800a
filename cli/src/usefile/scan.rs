//! # Source Collection
//!
//! File: cli/src/usefile/scan.rs
//!
//! ## Overview
//!
//! Turns an existing package.use file, or a package.use directory, into the
//! flat file read by the save routines.
//!
//! ## Architecture
//!
//! - `PackageScanner`: the seam between the existence check and whatever
//!   produces the flat file.
//! - `FlatFileCollector`: the default scanner. It refuses a source that is
//!   one of its own work files and skips them inside a source directory.
//!   It then truncates the flat file and for every line of every source file:
//!   - full-line comments go to the comment side file;
//!   - blank lines are dropped;
//!   - trailing comments are cut off and the remaining entry is written.
//! - `check_file_or_directory`: rejects a missing source, otherwise delegates.
//!
use crate::common::fs::io;
use crate::core::config::{Options, WorkPaths};
use crate::core::error::{PkgUseError, Result};
use crate::usefile::comment::show_comment;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Counts gathered by a scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Source files read.
    pub files: usize,
    /// Entries written to the flat file.
    pub entries: usize,
    /// Full-line comments written to the comment file.
    pub comments: usize,
}

/// Produces the flat file from an existing source path.
pub trait PackageScanner {
    fn scan(&self, source: &Path, options: &Options) -> Result<ScanReport>;
}

/// Default scanner writing into the flat file of `WorkPaths`.
#[derive(Debug, Clone)]
pub struct FlatFileCollector {
    paths: WorkPaths,
}

impl FlatFileCollector {
    pub fn new(paths: WorkPaths) -> Self {
        Self { paths }
    }

    /// Canonical locations of the flat file and the comment file. Neither
    /// has to exist yet.
    fn work_files(&self) -> Result<[PathBuf; 2]> {
        let root = fs::canonicalize(&self.paths.tmp_root)
            .with_context(|| format!("Failed to resolve {:?}", self.paths.tmp_root))?;
        let in_root = |path: PathBuf| match path.file_name() {
            Some(name) => root.join(name),
            None => path,
        };
        Ok([
            in_root(self.paths.flat_file()),
            in_root(self.paths.comment_file()),
        ])
    }

    /// Source files in a stable order: the file itself, or every regular
    /// file below a directory sorted by path. Hidden entries and the work
    /// files are skipped.
    fn source_files(source: &Path, work_files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        if !source.is_dir() {
            return Ok(vec![source.to_path_buf()]);
        }
        let mut files = Vec::new();
        let walker = WalkDir::new(source)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {:?}", source))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if work_files.iter().any(|w| w.as_path() == entry.path()) {
                debug!("Skipping work file {:?}", entry.path());
                continue;
            }
            files.push(entry.into_path());
        }
        Ok(files)
    }
}

impl PackageScanner for FlatFileCollector {
    fn scan(&self, source: &Path, options: &Options) -> Result<ScanReport> {
        debug!("Scanning {:?} (output as {})", source, options.output_as);
        let flat_path = self.paths.flat_file();
        let comment_path = self.paths.comment_file();

        // Walk from the resolved path so entries compare against the work files.
        let work_files = self.work_files()?;
        let source = fs::canonicalize(source)
            .with_context(|| format!("Failed to resolve {:?}", source))?;
        if work_files.contains(&source) {
            return Err(PkgUseError::SourceIsWorkFile { path: source }.into());
        }
        let sources = Self::source_files(&source, &work_files)?;

        let mut flat = BufWriter::new(
            File::create(&flat_path)
                .with_context(|| format!("Failed to create flat file {:?}", flat_path))?,
        );
        let mut comments = BufWriter::new(
            File::create(&comment_path)
                .with_context(|| format!("Failed to create comment file {:?}", comment_path))?,
        );

        let mut report = ScanReport::default();
        for file in sources {
            let content = io::read_file_to_string(&file)?;
            report.files += 1;

            for line in content.lines() {
                let comment = show_comment(line, &mut comments)
                    .with_context(|| format!("Failed to write {:?}", comment_path))?;
                if line.starts_with('#') {
                    if comment.is_some() {
                        report.comments += 1;
                    }
                    continue;
                }
                let entry = line.split('#').next().unwrap_or_default().trim();
                if entry.is_empty() {
                    continue;
                }
                writeln!(flat, "{}", entry)
                    .with_context(|| format!("Failed to write {:?}", flat_path))?;
                report.entries += 1;
            }
        }

        flat.flush()
            .with_context(|| format!("Failed to write {:?}", flat_path))?;
        comments
            .flush()
            .with_context(|| format!("Failed to write {:?}", comment_path))?;

        info!(
            "Collected {} entries and {} comments from {} files under {:?}",
            report.entries, report.comments, report.files, source
        );
        Ok(report)
    }
}

/// Scans `path` if it exists.
///
/// # Errors
///
/// `PkgUseError::NotFound` when nothing exists at `path`, otherwise
/// whatever the scanner returns.
pub fn check_file_or_directory(
    path: &Path,
    options: &Options,
    scanner: &dyn PackageScanner,
) -> Result<ScanReport> {
    if !path.exists() {
        return Err(PkgUseError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    scanner.scan(path, options)
}
