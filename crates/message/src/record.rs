use std::fmt;

use crate::Message;

/// Owned snapshot of a delivered [`Message`].
///
/// [`Message`] is move-only so that a pending delivery cannot be duplicated.
/// Sinks that need to keep what they received store a record instead.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageRecord {
    /// Accumulated message text.
    pub text: String,
    /// Normalized source identifier, empty when unset.
    pub source: String,
    /// Source line, `0` when unset.
    pub line: u32,
}

impl MessageRecord {
    /// Reports whether the recorded text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&Message> for MessageRecord {
    fn from(message: &Message) -> Self {
        Self {
            text: message.text().to_owned(),
            source: message.source().to_owned(),
            line: message.line(),
        }
    }
}

impl From<Message> for MessageRecord {
    fn from(message: Message) -> Self {
        message.into_record()
    }
}

impl fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.source.is_empty(), self.line) {
            (true, 0) => f.write_str(&self.text),
            (true, line) => write!(f, "{line}: {}", self.text),
            (false, 0) => write!(f, "{}: {}", self.source, self.text),
            (false, line) => write!(f, "{}:{line}: {}", self.source, self.text),
        }
    }
}
