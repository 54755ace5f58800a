//! # pkguse Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Top-level commands of the CLI. Each command module defines its clap
//! arguments and a handler called from `main.rs`.
//!
//! - `save`: collect package.use entries and save them as a file or directory
//!

/// Collects a package.use source and saves it under the temp root.
pub mod save;
