//! Category derivation for flat file lines.
//!
//! A line looks like `cat/pkg flag ...` or `key=cat/pkg flag ...`. The
//! category is the part of the package atom before its first `/`.

/// Returns the category of `line`, or `None` when no usable one exists.
///
/// The first space separated token is the package info. If it contains `=`
/// and the text after the first `=` is non-empty, the category is taken from
/// there; otherwise from the info token itself. Empty, `.` and `..` are
/// rejected since the category becomes a file name.
pub fn category_of(line: &str) -> Option<&str> {
    let info = line.split(' ').next().unwrap_or_default().trim();

    let category = info
        .split('=')
        .nth(1)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.split('/').next())
        .or_else(|| info.split('/').next())?;

    match category {
        "" | "." | ".." => None,
        valid => Some(valid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_atom() {
        assert_eq!(category_of("cat1/pkg1 -flag"), Some("cat1"));
        assert_eq!(category_of("cat2/pkgX"), Some("cat2"));
        assert_eq!(category_of("dev-lang/rust llvm -doc"), Some("dev-lang"));
    }

    #[test]
    fn test_versioned_atom() {
        assert_eq!(category_of(">=dev-lang/python-3.12 sqlite"), Some("dev-lang"));
        assert_eq!(category_of("=media-libs/mesa-24.1 vulkan"), Some("media-libs"));
    }

    #[test]
    fn test_key_without_value_falls_back() {
        assert_eq!(category_of("key=/x"), None);
        assert_eq!(category_of("sys-apps/foo= x"), Some("sys-apps"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(category_of("app-misc/screen\n"), Some("app-misc"));
        assert_eq!(category_of("app-misc/tmux\tvim-syntax"), Some("app-misc"));
    }

    #[test]
    fn test_unusable_lines() {
        assert_eq!(category_of(""), None);
        assert_eq!(category_of(" leading/space x"), None);
        assert_eq!(category_of("../escape x"), None);
        assert_eq!(category_of("/absolute x"), None);
    }
}
