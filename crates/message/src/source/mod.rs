//! Source path normalization.
//!
//! Compilers report source files in whatever form the build handed them:
//! absolute or relative, with `\` or `/` separators, and occasionally with a
//! lower-cased first letter when the location is captured inside an inlined
//! function. [`normalize_source`] turns those paths into stable identifiers
//! relative to a configured [`SourceRoot`].

use std::borrow::Cow;
use std::sync::OnceLock;

use crate::build_config::configured_source_root;

/// Root used when no source root was configured for the build.
pub const DEFAULT_SOURCE_ROOT: &str = "Source/";

/// Prefix stripped from source paths to make them project-relative.
///
/// The root is stored with `/` separators so it can be matched against paths
/// that were normalized the same way. An empty root is replaced with
/// [`DEFAULT_SOURCE_ROOT`].
///
/// # Examples
///
/// ```
/// use message::SourceRoot;
///
/// let root = SourceRoot::new(r"project\Source\");
/// assert_eq!(root.as_str(), "project/Source/");
/// assert_eq!(SourceRoot::new("").as_str(), "Source/");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct SourceRoot {
    root: Cow<'static, str>,
}

impl SourceRoot {
    /// Creates a source root from the provided prefix.
    #[must_use]
    pub fn new<T: Into<Cow<'static, str>>>(root: T) -> Self {
        let root = root.into();

        if root.is_empty() {
            Self::default()
        } else if root.contains('\\') {
            Self {
                root: Cow::Owned(root.replace('\\', "/")),
            }
        } else {
            Self { root }
        }
    }

    /// Returns the root configured when the workspace was built.
    ///
    /// The value is resolved once from [`configured_source_root`] and shared
    /// for the lifetime of the process.
    #[must_use]
    pub fn configured() -> &'static Self {
        static CONFIGURED: OnceLock<SourceRoot> = OnceLock::new();
        CONFIGURED.get_or_init(|| Self::new(configured_source_root()))
    }

    /// Returns the prefix with `/` separators.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.root
    }

    /// Normalizes `path` against this root.
    ///
    /// Shorthand for [`normalize_source`].
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        normalize_source(path, self)
    }
}

impl Default for SourceRoot {
    fn default() -> Self {
        Self {
            root: Cow::Borrowed(DEFAULT_SOURCE_ROOT),
        }
    }
}

impl From<String> for SourceRoot {
    fn from(root: String) -> Self {
        Self::new(root)
    }
}

impl From<&'static str> for SourceRoot {
    fn from(root: &'static str) -> Self {
        Self::new(root)
    }
}

impl From<SourceRoot> for String {
    fn from(root: SourceRoot) -> Self {
        root.root.into_owned()
    }
}

/// Converts a raw source path into a root-relative identifier.
///
/// Backslashes become `/`, everything up to and including the last ASCII
/// case-insensitive occurrence of the root is removed, and the first remaining
/// character is upper-cased. Paths that do not contain the root keep their
/// full (separator-normalized) form. An empty path stays empty.
///
/// The result never contains the root, so normalizing it again is a no-op.
///
/// # Examples
///
/// ```
/// use message::{SourceRoot, normalize_source};
///
/// let root = SourceRoot::new("Source/");
/// assert_eq!(
///     normalize_source(r"C:\proj\Source\Common\Utility.cpp", &root),
///     "Common/Utility.cpp"
/// );
/// assert_eq!(normalize_source("", &root), "");
/// ```
#[must_use]
pub fn normalize_source(path: &str, root: &SourceRoot) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut normalized = path.replace('\\', "/");

    if let Some(start) = rfind_ignore_ascii_case(&normalized, root.as_str()) {
        normalized.drain(..start + root.as_str().len());
    }

    // Inlined functions may report the file with a lower-cased first letter.
    if let Some(first) = normalized.get_mut(..1) {
        first.make_ascii_uppercase();
    }

    normalized
}

fn rfind_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return None;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .rposition(|window| window.eq_ignore_ascii_case(needle))
}
