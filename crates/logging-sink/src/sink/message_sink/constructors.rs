use std::sync::Mutex;

use super::{MessageSink, SinkState};
use crate::line_mode::LineMode;

impl<W> MessageSink<W> {
    /// Creates a new sink that appends a newline after each rendered message.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_line_mode(writer, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(writer: W, line_mode: LineMode) -> Self {
        Self::with_parts(writer, String::new(), line_mode)
    }

    /// Creates a sink from an explicit scratch buffer and [`LineMode`].
    ///
    /// The scratch buffer is cleared before each render and keeps its
    /// capacity, so passing one recovered from [`into_parts`](Self::into_parts)
    /// avoids growing a fresh buffer.
    #[must_use]
    pub fn with_parts(writer: W, scratch: String, line_mode: LineMode) -> Self {
        Self {
            state: Mutex::new(SinkState {
                writer,
                scratch,
                line_mode,
            }),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.into_state().writer
    }

    /// Consumes the sink and returns the writer, scratch buffer, and line mode.
    #[must_use]
    pub fn into_parts(self) -> (W, String, LineMode) {
        let SinkState {
            writer,
            scratch,
            line_mode,
        } = self.into_state();
        (writer, scratch, line_mode)
    }
}

impl<W> Default for MessageSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
