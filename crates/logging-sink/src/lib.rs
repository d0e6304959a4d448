#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` delivers [`message::Message`] values to destinations. The
//! [`Sink`] trait is the capability every destination implements, and
//! [`ScopedMessage`] ties a message under construction to a sink so that the
//! message is delivered exactly once when it goes out of scope.
//!
//! # Design
//!
//! A [`ScopedMessage`] holds the message inline and a borrowed sink handle.
//! While the handle is present the scoped message is armed; dropping it hands
//! the message to [`Sink::write`]. [`ScopedMessage::transfer`] moves the
//! pending delivery to a new instance and disarms the old one, so a chain of
//! transfers still delivers once. Delivery runs from `Drop`, which covers
//! early returns and panic unwinding alike.
//!
//! The crate ships four sinks:
//!
//! - [`MessageSink`] renders messages into any [`std::io::Write`] target,
//!   honouring a [`LineMode`].
//! - [`MemorySink`] keeps a [`MessageRecord`](message::MessageRecord) for
//!   every delivery.
//! - [`TracingSink`] re-emits messages as `tracing` events.
//! - [`NullSink`] discards everything.
//!
//! # Invariants
//!
//! - An armed [`ScopedMessage`] delivers exactly once; a disarmed one never
//!   delivers.
//! - [`Sink::write`] never reports failure to the caller. Sinks log their own
//!   failures through `tracing`.
//! - Sinks serialize concurrent deliveries themselves.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{MemorySink, ScopedMessage};
//! use message::SourceRoot;
//!
//! let sink = MemorySink::new();
//! {
//!     let mut scoped = ScopedMessage::new(&sink);
//!     scoped.append("value=").append(42);
//!     scoped.set_source_with("Source/Foo.cpp", &SourceRoot::new("Source/"));
//!     scoped.set_line(10);
//! }
//!
//! let records = sink.records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].text, "value=42");
//! assert_eq!(records[0].source, "Foo.cpp");
//! assert_eq!(records[0].line, 10);
//! ```
//!
//! # See also
//!
//! - [`message`] for message construction and source normalization.

mod line_mode;
mod macros;
mod scoped;
mod sink;

pub use line_mode::LineMode;
pub use scoped::ScopedMessage;
pub use sink::{MemorySink, MessageSink, NullSink, Sink, TRACING_TARGET, TracingSink};
