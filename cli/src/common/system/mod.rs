//! # pkguse System Utilities Module (`common::system`)
//!
//! File: cli/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Facts about the running process that other modules take as plain values:
//! whether it runs as root, and the base name it was invoked under. Both are
//! computed once in `main` and passed down, so tests can inject them.
//!
use std::ffi::OsStr;
use std::path::Path;

/// Name used when the invocation name cannot be determined.
pub const FALLBACK_PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Privilege level of the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    /// Real uid 0.
    Root,
    /// Any other user.
    User,
}

impl Privilege {
    /// Inspects the real uid of the process.
    pub fn current() -> Self {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        Self::from_uid(uid)
    }

    pub fn from_uid(uid: libc::uid_t) -> Self {
        if uid == 0 {
            Privilege::Root
        } else {
            Privilege::User
        }
    }
}

/// Base name of the program as invoked (`argv[0]`).
pub fn program_name() -> String {
    base_name(std::env::args_os().next().as_deref())
}

fn base_name(arg0: Option<&OsStr>) -> String {
    arg0.and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_PROGRAM_NAME.to_string())
}
