use crate::MessageRecord;

mod append;
mod setters;
#[cfg(test)]
mod tests;

/// Log message text together with its provenance.
///
/// A message is built up through [`append`](Self::append) or
/// [`std::fmt::Write`], then read back with [`text`](Self::text). The source
/// identifier and line record where the message was produced. Messages are
/// move-only: moving one transfers the buffer and provenance, and
/// [`take`](Self::take) does the same while leaving the original empty.
///
/// # Examples
///
/// ```
/// use std::fmt::Write as _;
/// use message::Message;
///
/// let mut message = Message::new();
/// write!(message, "{} files", 3).unwrap();
/// message.append(" copied");
///
/// assert_eq!(message.text(), "3 files copied");
/// assert!(!message.is_empty());
/// ```
#[derive(Debug, Default, Eq, PartialEq)]
pub struct Message {
    text: String,
    source: String,
    line: u32,
}

impl Message {
    /// Creates an empty message without provenance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            source: String::new(),
            line: 0,
        }
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the normalized source identifier, empty when unset.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the source line, `0` when unset.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Reports whether the text buffer is empty.
    ///
    /// Provenance does not count towards emptiness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Moves the content out, leaving this message empty with no provenance.
    #[must_use = "the taken message holds the previous content"]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Captures the current content as an owned [`MessageRecord`].
    #[must_use]
    pub fn to_record(&self) -> MessageRecord {
        MessageRecord::from(self)
    }

    /// Converts the message into a [`MessageRecord`] without copying the text.
    #[must_use]
    pub fn into_record(self) -> MessageRecord {
        MessageRecord {
            text: self.text,
            source: self.source,
            line: self.line,
        }
    }
}
