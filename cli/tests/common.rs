//! # pkguse CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each command gets an
//! isolated environment: the user config directory points into a temp dir
//! and the `PKGUSE_*` variables of the calling shell are removed.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// `assert_cmd::Command` for the compiled `pkguse` binary.
///
/// ## Panics
/// Panics if the `pkguse` binary cannot be found via `Command::cargo_bin`.
pub fn pkguse_cmd() -> Command {
    Command::cargo_bin("pkguse").expect("Failed to find pkguse binary for testing")
}

/// Scratch area for one test: a temp root for output, an empty config
/// home, and a log file path.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create sandbox");
        for sub in ["tmp", "config", "src"] {
            fs::create_dir(dir.path().join(sub)).expect("Failed to create sandbox dir");
        }
        Self { dir }
    }

    pub fn tmp_root(&self) -> PathBuf {
        self.dir.path().join("tmp")
    }

    pub fn log_file(&self) -> PathBuf {
        self.dir.path().join("pkguse.log")
    }

    /// Writes `content` to `src/<rel>` and returns the path.
    pub fn source(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join("src").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create source dir");
        }
        fs::write(&path, content).expect("Failed to write source");
        path
    }

    /// `pkguse save <source>` wired to this sandbox.
    pub fn save(&self, source: &Path) -> Command {
        let mut cmd = pkguse_cmd();
        cmd.env_remove("PKGUSE_CONFIG")
            .env_remove("PKGUSE_TMP_ROOT")
            .env_remove("RUST_LOG")
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .arg("save")
            .arg(source)
            .arg("--tmp-root")
            .arg(self.tmp_root())
            .arg("--logfile")
            .arg(self.log_file());
        cmd
    }
}
