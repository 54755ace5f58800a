//! Output mode: one flat file, or a directory with one file per category.

use crate::core::config::Options;
use crate::core::error::PkgUseError;
use std::fmt;
use tracing::debug;

/// Hint printed (followed by the CLI help) when the mode is not recognized.
pub const OUTPUT_AS_HINT: &str = "output_as file [f | file] or as directory [d | dir]";

/// Shape of the saved result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// A single file, a copy of the flat file.
    #[default]
    File,
    /// A directory of category files.
    Dir,
}

impl OutputMode {
    /// Parses the accepted spellings. The two sets do not overlap: `f` is
    /// always `File`.
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "file" | "f" => Some(OutputMode::File),
            "dir" | "d" => Some(OutputMode::Dir),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::File => "file",
            OutputMode::Dir => "dir",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sets `options.output_as` from a raw `--output-as` argument.
///
/// On an unknown argument the options are left untouched and a
/// `PkgUseError::Usage` carrying `OUTPUT_AS_HINT` is returned; the caller
/// prints it together with the usage text.
pub fn output_as<'a>(arg: &str, options: &'a mut Options) -> Result<&'a mut Options, PkgUseError> {
    let mode = OutputMode::from_arg(arg).ok_or_else(|| PkgUseError::Usage {
        hint: OUTPUT_AS_HINT.to_string(),
    })?;
    debug!("Output mode '{}' resolved to {}", arg, mode);
    options.output_as = mode;
    Ok(options)
}
