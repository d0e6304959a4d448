/// Creates an armed [`ScopedMessage`](crate::ScopedMessage) stamped with the caller's file and line.
///
/// The first argument is a reference to the sink. An optional format string
/// and arguments initialise the text. The file is normalized against
/// [`SourceRoot::configured`](message::SourceRoot::configured).
///
/// # Examples
///
/// ```
/// use logging_sink::{MemorySink, scoped_message};
///
/// let sink = MemorySink::new();
/// {
///     let mut scoped = scoped_message!(&sink, "copied {} files", 3);
///     scoped.append(" in 2s");
/// }
///
/// let record = sink.last().unwrap();
/// assert_eq!(record.text, "copied 3 files in 2s");
/// assert!(record.line > 0);
/// assert!(record.source.ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! scoped_message {
    ($sink:expr $(,)?) => {{
        let mut scoped = $crate::ScopedMessage::new($sink);
        scoped.set_source(file!()).set_line(line!());
        scoped
    }};
    ($sink:expr, $($arg:tt)+) => {{
        let mut scoped = $crate::scoped_message!($sink);
        // Writing into a message buffer cannot fail.
        let _ = ::std::fmt::Write::write_fmt(&mut scoped, format_args!($($arg)+));
        scoped
    }};
}

#[cfg(test)]
mod tests {
    use crate::MemorySink;

    #[test]
    fn scoped_message_macro_records_location() {
        let sink = MemorySink::new();
        {
            let scoped = scoped_message!(&sink);
            assert!(scoped.is_armed());
        }

        let record = sink.last().expect("delivered");
        assert!(record.is_empty());
        assert!(record.line > 0);
        assert!(record.source.ends_with("src/macros.rs"));
    }

    #[test]
    fn scoped_message_macro_formats_text() {
        let sink = MemorySink::new();
        drop(scoped_message!(&sink, "{}={}", "value", 42));
        assert_eq!(sink.records()[0].text, "value=42");
    }
}
