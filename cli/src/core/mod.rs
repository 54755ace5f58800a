//! # pkguse Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by the command handlers:
//! - `config`: config file loading, `Options` and `WorkPaths`
//! - `error`: error types, exit codes and the `Result` alias
//! - `logging`: log file selection and subscriber setup
//!
//! ```rust
//! use crate::core::config::{Options, WorkPaths};
//! use crate::core::error::{PkgUseError, Result};
//! use crate::core::logging;
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
