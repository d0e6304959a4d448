#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `quill` is the facade over the workspace crates. It re-exports the message
//! buffer from [`message`], the sinks and the scoped deliver-once wrapper from
//! [`logging_sink`], and the file helpers from [`utility`].
//!
//! # Examples
//!
//! ```
//! use quill::{MemorySink, ScopedMessage, SourceRoot};
//!
//! let sink = MemorySink::new();
//! {
//!     let mut scoped = ScopedMessage::new(&sink);
//!     scoped.append("loaded ").append(3).append(" shaders");
//!     scoped.set_source_with(r"C:\proj\Source\Render\Shader.cpp", &SourceRoot::default());
//!     scoped.set_line(88);
//! }
//!
//! let record = sink.last().expect("one delivery");
//! assert_eq!(record.to_string(), "Render/Shader.cpp:88: loaded 3 shaders");
//! ```

pub use logging_sink::{
    LineMode, MemorySink, MessageSink, NullSink, ScopedMessage, Sink, TRACING_TARGET, TracingSink,
    scoped_message,
};
pub use message::{
    DEFAULT_SOURCE_ROOT, InvalidLineError, Message, MessageRecord, SourceRoot,
    configured_source_root, message_here, normalize_source,
};
pub use utility::{
    ReadError, file_extension, file_path, read_binary_file, read_text_file, try_read_binary_file,
    try_read_text_file,
};
