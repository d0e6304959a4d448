use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::line_mode::LineMode;

mod constructors;
mod writing;

/// Streaming sink that renders [`message::Message`] values into an
/// [`std::io::Write`] target.
///
/// Each delivery is rendered as `source:line: text`, leaving out whichever
/// provenance parts are unset, and terminated according to the configured
/// [`LineMode`]. Empty messages are discarded. The writer and a reusable
/// scratch buffer live behind a mutex so the sink can be shared by scoped
/// messages on different threads.
///
/// # Examples
///
/// Collect diagnostics into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging_sink::{MessageSink, ScopedMessage};
/// use message::SourceRoot;
///
/// let sink = MessageSink::new(Vec::new());
/// {
///     let mut scoped = ScopedMessage::new(&sink);
///     scoped.append("value=").append(42);
///     scoped.set_source_with("Source/Foo.cpp", &SourceRoot::default());
///     scoped.set_line(10);
/// }
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output, "Foo.cpp:10: value=42\n");
/// ```
///
/// Render without appending a newline:
///
/// ```
/// use logging_sink::{LineMode, MessageSink};
/// use message::Message;
///
/// let sink = MessageSink::with_line_mode(Vec::new(), LineMode::WithoutNewline);
/// let mut message = Message::new();
/// message.append("ready");
/// sink.try_write(&message)?;
///
/// assert_eq!(sink.into_inner(), b"ready".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink<W> {
    state: Mutex<SinkState<W>>,
}

struct SinkState<W> {
    writer: W,
    scratch: String,
    line_mode: LineMode,
}

impl<W> MessageSink<W> {
    fn lock(&self) -> MutexGuard<'_, SinkState<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn into_state(self) -> SinkState<W> {
        self.state.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        self.lock().line_mode
    }

    /// Updates the [`LineMode`] used for subsequent writes.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        self.lock().line_mode = line_mode;
    }

    /// Replaces the underlying writer, returning the previous one.
    ///
    /// The scratch buffer and [`LineMode`] are kept.
    #[must_use = "the returned writer contains output produced before the replacement"]
    pub fn replace_writer(&self, writer: W) -> W {
        std::mem::replace(&mut self.lock().writer, writer)
    }
}

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("MessageSink")
            .field("writer", &state.writer)
            .field("line_mode", &state.line_mode)
            .finish()
    }
}
