//! Path splitting on raw strings.
//!
//! Both `/` and `\` count as separators regardless of platform, matching the
//! forms source paths arrive in.

const SEPARATORS: [char; 2] = ['/', '\\'];

/// Returns the directory part of `filename`, including the trailing separator.
///
/// Returns an empty string when `filename` has no separator.
///
/// # Examples
///
/// ```
/// use utility::file_path;
///
/// assert_eq!(file_path("Data/Shaders/Basic.shader"), "Data/Shaders/");
/// assert_eq!(file_path(r"C:\Data\Basic.shader"), r"C:\Data\");
/// assert_eq!(file_path("Basic.shader"), "");
/// ```
#[must_use]
pub fn file_path(filename: &str) -> &str {
    filename
        .rfind(SEPARATORS)
        .and_then(|index| filename.get(..=index))
        .unwrap_or_default()
}

/// Returns the extension of the final path component, without the dot.
///
/// Returns an empty string when the final component has no dot. Dots in
/// directory names are ignored, so this differs from a plain last-dot search
/// over the whole string: `build.d/Makefile` has no extension rather than
/// `d/Makefile`.
///
/// # Examples
///
/// ```
/// use utility::file_extension;
///
/// assert_eq!(file_extension("Data/Textures/Box.png"), "png");
/// assert_eq!(file_extension("archive.tar.gz"), "gz");
/// assert_eq!(file_extension("build.d/Makefile"), "");
/// ```
#[must_use]
pub fn file_extension(filename: &str) -> &str {
    let name = filename
        .rfind(SEPARATORS)
        .and_then(|index| filename.get(index + 1..))
        .unwrap_or(filename);

    name.rfind('.')
        .and_then(|index| name.get(index + 1..))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_path_keeps_trailing_separator() {
        assert_eq!(file_path("a/b/c.txt"), "a/b/");
        assert_eq!(file_path("/c.txt"), "/");
        assert_eq!(file_path("dir/"), "dir/");
    }

    #[test]
    fn file_path_uses_last_separator_of_either_kind() {
        assert_eq!(file_path(r"a\b/c\d.txt"), r"a\b/c\");
    }

    #[test]
    fn file_path_without_separator_is_empty() {
        assert_eq!(file_path("plain.txt"), "");
        assert_eq!(file_path(""), "");
    }

    #[test]
    fn file_extension_of_final_component() {
        assert_eq!(file_extension("a/b/c.txt"), "txt");
        assert_eq!(file_extension(r"a\b\c.TXT"), "TXT");
        assert_eq!(file_extension("name."), "");
    }

    #[test]
    fn file_extension_missing_is_empty() {
        assert_eq!(file_extension("Makefile"), "");
        assert_eq!(file_extension("v1.2/Makefile"), "");
        assert_eq!(file_extension(""), "");
    }

    #[test]
    fn hidden_file_extension() {
        assert_eq!(file_extension(".gitignore"), "gitignore");
    }
}
