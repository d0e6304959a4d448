#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/message/src/lib.rs
//!
//! # Overview
//!
//! `message` provides the [`Message`] buffer shared by every logging layer of
//! the quill workspace. A message accumulates free-form text through
//! stream-style appends and carries provenance: a normalized source identifier
//! and a line number. It knows nothing about where it is delivered; the
//! `logging-sink` crate owns delivery.
//!
//! # Design
//!
//! - Text is appended through [`Message::append`] or [`std::fmt::Write`], so
//!   `write!(message, "...")` behaves like inserting into an output stream.
//! - Source paths are normalized against a [`SourceRoot`]. The build script
//!   resolves the configured root at compile time and exposes it via
//!   [`configured_source_root`]; callers that need a different root pass it
//!   explicitly through [`Message::set_source_with`].
//! - [`Message`] is move-only. Sinks that retain delivered content snapshot it
//!   into a cloneable [`MessageRecord`].
//!
//! # Invariants
//!
//! - A non-zero line is always positive; [`Message::set_line`] panics on
//!   non-positive input.
//! - A normalized source never contains `\` separators.
//!
//! # Errors
//!
//! Only [`Message::try_set_line`] is fallible and reports
//! [`InvalidLineError`]. Every other operation is total.
//!
//! # Examples
//!
//! ```
//! use message::{Message, SourceRoot};
//!
//! let mut message = Message::new();
//! message.append("value=").append(42);
//! message.set_source_with("Source/Logger/Message.cpp", &SourceRoot::new("Source/"));
//! message.set_line(10);
//!
//! assert_eq!(message.text(), "value=42");
//! assert_eq!(message.source(), "Logger/Message.cpp");
//! assert_eq!(message.line(), 10);
//! ```

mod build_config;
mod line;
mod macros;
mod message_impl;
mod record;
mod source;

pub use build_config::configured_source_root;
pub use line::InvalidLineError;
pub use message_impl::Message;
pub use record::MessageRecord;
pub use source::{DEFAULT_SOURCE_ROOT, SourceRoot, normalize_source};
