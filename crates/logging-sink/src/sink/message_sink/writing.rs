use std::fmt::Write as _;
use std::io::{self, Write};

use message::Message;

use super::MessageSink;
use crate::line_mode::LineMode;
use crate::sink::Sink;

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes a single message using the sink's current [`LineMode`].
    ///
    /// Empty messages are skipped and report success.
    pub fn try_write(&self, message: &Message) -> io::Result<()> {
        let mut state = self.lock();
        let line_mode = state.line_mode;
        state.render(message, line_mode)
    }

    /// Writes `message` using an explicit [`LineMode`] without mutating the sink.
    pub fn try_write_with_mode(&self, message: &Message, line_mode: LineMode) -> io::Result<()> {
        self.lock().render(message, line_mode)
    }

    /// Flushes the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        self.lock().writer.flush()
    }
}

impl<W> super::SinkState<W>
where
    W: Write,
{
    fn render(&mut self, message: &Message, line_mode: LineMode) -> io::Result<()> {
        if message.is_empty() {
            return Ok(());
        }

        self.scratch.clear();
        // Formatting into a `String` cannot fail.
        let _ = match (message.source(), message.line()) {
            ("", 0) => write!(self.scratch, "{}", message.text()),
            ("", line) => write!(self.scratch, "{line}: {}", message.text()),
            (source, 0) => write!(self.scratch, "{source}: {}", message.text()),
            (source, line) => write!(self.scratch, "{source}:{line}: {}", message.text()),
        };

        self.scratch.push_str(line_mode.terminator());

        self.writer.write_all(self.scratch.as_bytes())
    }
}

impl<W> Sink for MessageSink<W>
where
    W: Write,
{
    fn write(&self, message: &Message) {
        if let Err(error) = self.try_write(message) {
            tracing::warn!(
                source = message.source(),
                line = message.line(),
                %error,
                "failed to write log message"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use message::SourceRoot;

    fn located(text: &str, source: &str, line: u32) -> Message {
        let mut message = Message::new();
        message.set_text(text);
        message.set_source_with(source, &SourceRoot::default());
        if line > 0 {
            message.set_line(line);
        }
        message
    }

    #[test]
    fn renders_full_provenance() {
        let sink = MessageSink::new(Vec::new());
        sink.try_write(&located("value=42", "Source/Foo.cpp", 10))
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"Foo.cpp:10: value=42\n".to_vec());
    }

    #[test]
    fn omits_missing_provenance() {
        let sink = MessageSink::new(Vec::new());
        sink.try_write(&located("bare", "", 0)).expect("write succeeds");
        sink.try_write(&located("unlined", "Source/Foo.cpp", 0))
            .expect("write succeeds");
        sink.try_write(&located("unsourced", "", 3))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("bare"));
        assert_eq!(lines.next(), Some("Foo.cpp: unlined"));
        assert_eq!(lines.next(), Some("3: unsourced"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn discards_empty_messages() {
        let sink = MessageSink::new(Vec::new());
        sink.try_write(&located("", "Source/Foo.cpp", 4))
            .expect("write succeeds");
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn explicit_mode_overrides_once() {
        let sink = MessageSink::new(Vec::new());
        sink.try_write_with_mode(&located("progress", "", 0), LineMode::WithoutNewline)
            .expect("write succeeds");
        sink.try_write(&located("done", "", 0)).expect("write succeeds");

        assert_eq!(sink.line_mode(), LineMode::WithNewline);
        assert_eq!(sink.into_inner(), b"progressdone\n".to_vec());
    }

    #[test]
    fn set_line_mode_applies_to_later_writes() {
        let sink = MessageSink::new(Vec::new());
        sink.set_line_mode(LineMode::WithoutNewline);
        sink.try_write(&located("a", "", 0)).expect("write succeeds");
        sink.try_write(&located("b", "", 0)).expect("write succeeds");
        assert_eq!(sink.into_inner(), b"ab".to_vec());
    }

    #[test]
    fn into_parts_allows_reusing_scratch() {
        let sink = MessageSink::with_parts(Vec::new(), String::new(), LineMode::WithoutNewline);
        sink.try_write(&located("first", "", 0)).expect("write succeeds");

        let (writer, scratch, mode) = sink.into_parts();
        assert_eq!(mode, LineMode::WithoutNewline);
        assert!(scratch.capacity() >= "first".len());

        let sink = MessageSink::with_parts(writer, scratch, LineMode::WithNewline);
        sink.try_write(&located("second", "", 0)).expect("write succeeds");
        assert_eq!(sink.into_inner(), b"firstsecond\n".to_vec());
    }

    #[test]
    fn replace_writer_returns_previous_output() {
        let sink = MessageSink::new(Vec::new());
        sink.try_write(&located("old", "", 0)).expect("write succeeds");

        let previous = sink.replace_writer(Vec::new());
        sink.try_write(&located("new", "", 0)).expect("write succeeds");

        assert_eq!(previous, b"old\n".to_vec());
        assert_eq!(sink.into_inner(), b"new\n".to_vec());
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_surface_from_try_write() {
        let sink = MessageSink::new(FailingWriter);
        let error = sink
            .try_write(&located("lost", "", 0))
            .expect_err("writer fails");
        assert_eq!(error.to_string(), "disk full");
    }

    #[test]
    fn sink_write_swallows_errors() {
        let sink = MessageSink::new(FailingWriter);
        Sink::write(&sink, &located("lost", "", 0));
        sink.flush().expect("flush succeeds");
    }
}
