#![deny(unsafe_code)]

//! Shared fixtures for tests across the quill workspace.
//!
//! Helpers panic on setup failures; a broken fixture should fail the test
//! that requested it.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch directory removed when dropped.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    /// Creates an empty scratch directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create scratch directory"),
        }
    }

    /// Returns the scratch directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Returns the path `name` would have inside the scratch directory.
    ///
    /// The file is not created.
    #[must_use]
    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `contents` to `name` inside the scratch directory and returns its path.
    ///
    /// Missing parent directories are created.
    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture parent directories");
        }
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
