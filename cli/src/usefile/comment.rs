//! Comment extraction for package.use lines.

use std::io::{self, Write};

/// Returns the comment carried by `line`, if any.
///
/// The comment is the text between the first `#` and the next one, trimmed.
/// A line without `#`, or with nothing but whitespace after it, has none.
pub fn comment_of(line: &str) -> Option<String> {
    line.split('#')
        .nth(1)
        .map(str::trim)
        .filter(|comment| !comment.is_empty())
        .map(str::to_string)
}

/// Extracts the comment of `line` and records full-line comments.
///
/// When the line starts with `#` the comment is written to `sink` as one
/// line. Trailing comments (`cat/pkg flag # note`) are returned but not
/// written anywhere.
///
/// # Errors
///
/// Returns an `Err` only if writing to `sink` fails.
pub fn show_comment<W: Write>(line: &str, sink: &mut W) -> io::Result<Option<String>> {
    let comment = comment_of(line);
    if line.starts_with('#') {
        if let Some(text) = &comment {
            writeln!(sink, "{}", text)?;
        }
    }
    Ok(comment)
}
