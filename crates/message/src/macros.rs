/// Creates a [`Message`](crate::Message) stamped with the caller's file and line.
///
/// The file is normalized against [`SourceRoot::configured`](crate::SourceRoot::configured).
/// An optional format string initialises the text.
///
/// # Examples
///
/// ```
/// use message::message_here;
///
/// let message = message_here!("{} entries", 3);
/// assert_eq!(message.text(), "3 entries");
/// assert!(message.line() > 0);
/// assert!(message.source().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! message_here {
    () => {{
        let mut message = $crate::Message::new();
        message.set_source(file!()).set_line(line!());
        message
    }};
    ($($arg:tt)+) => {{
        let mut message = $crate::message_here!();
        // Writing into a message buffer cannot fail.
        let _ = ::std::fmt::Write::write_fmt(&mut message, format_args!($($arg)+));
        message
    }};
}
