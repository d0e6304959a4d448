use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error returned by [`try_read_text_file`] and [`try_read_binary_file`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file was read but is not valid UTF-8.
    #[error("{} is not valid UTF-8", path.display())]
    NotUtf8 {
        /// Path that was read.
        path: PathBuf,
    },
}

impl ReadError {
    /// Returns the path the failed read targeted.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::NotUtf8 { path } => path,
        }
    }
}

/// Reads the whole file at `path` as bytes.
pub fn try_read_binary_file(path: impl AsRef<Path>) -> Result<Vec<u8>, ReadError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the whole file at `path` as UTF-8 text.
pub fn try_read_text_file(path: impl AsRef<Path>) -> Result<String, ReadError> {
    let path = path.as_ref();
    let bytes = try_read_binary_file(path)?;
    String::from_utf8(bytes).map_err(|_| ReadError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Reads the whole file at `path` as bytes, or returns an empty vector.
///
/// A missing or unreadable file is indistinguishable from an empty one.
#[must_use]
pub fn read_binary_file(path: impl AsRef<Path>) -> Vec<u8> {
    try_read_binary_file(path).unwrap_or_else(|error| {
        tracing::debug!(path = %error.path().display(), %error, "returning empty file content");
        Vec::new()
    })
}

/// Reads the whole file at `path` as text, or returns an empty string.
///
/// A missing, unreadable, or non-UTF-8 file is indistinguishable from an
/// empty one.
#[must_use]
pub fn read_text_file(path: impl AsRef<Path>) -> String {
    try_read_text_file(path).unwrap_or_else(|error| {
        tracing::debug!(path = %error.path().display(), %error, "returning empty file content");
        String::new()
    })
}
