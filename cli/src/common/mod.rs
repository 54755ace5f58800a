//! # pkguse Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities that know nothing about package.use files:
//!
//! - **`fs`**: directory creation, appending, removal, copying.
//! - **`system`**: privilege level and invocation name of the process.
//!
//! ```rust
//! use crate::common::{fs, system};
//!
//! let privilege = system::Privilege::current();
//! fs::io::ensure_dir_exists(Path::new("/tmp/package.use"))?;
//! ```
//!

/// Utilities for filesystem operations (copying, I/O).
pub mod fs;
/// Process facts: privilege level and program name.
pub mod system;
