//! # pkguse package.use Handling (`usefile`)
//!
//! File: cli/src/usefile/mod.rs
//!
//! ## Overview
//!
//! Everything that understands the package.use line format:
//!
//! - **`mode`**: `OutputMode` and the `--output-as` parser.
//! - **`comment`**: comment extraction from a single line.
//! - **`category`**: category of an entry (`dev-lang/rust llvm` → `dev-lang`).
//! - **`scan`**: the existence check and the collector building the flat file.
//! - **`migrate`**: splitting the flat file into a category directory.
//! - **`save`**: saving the result as a file or as a directory.
//!
//! A typical run goes `scan` → `save::save_as_file` → `save::save_as_directory`,
//! where only the save routine matching the output mode does anything.
//!

pub mod category;
pub mod comment;
pub mod migrate;
pub mod mode;
pub mod save;
pub mod scan;
