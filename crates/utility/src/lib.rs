#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/utility/src/lib.rs
//!
//! File name helpers and whole-file readers.
//!
//! The readers come in two forms. [`read_text_file`] and [`read_binary_file`]
//! return empty content on any failure, so callers cannot tell a missing file
//! from an empty one. [`try_read_text_file`] and [`try_read_binary_file`]
//! report the reason through [`ReadError`] for callers that care.

mod content;
mod path;

pub use content::{
    ReadError, read_binary_file, read_text_file, try_read_binary_file, try_read_text_file,
};
pub use path::{file_extension, file_path};
