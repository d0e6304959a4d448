//! Newline policy for rendered messages.
//!
//! A [`MessageSink`](crate::MessageSink) renders every delivered message into
//! a scratch buffer before handing it to the writer. [`LineMode`] decides what
//! follows the rendered `source:line: text`: a `\n` so each scoped message
//! lands on its own line, or nothing when the caller frames output itself
//! (for example, when the writer is a single-record buffer or a socket that
//! adds its own framing).

/// Controls whether a [`MessageSink`](crate::MessageSink) terminates each
/// rendered message with a newline.
///
/// The default is [`LineMode::WithNewline`], which keeps one delivery per line
/// when several scoped messages share a sink.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LineMode {
    /// Terminate each rendered message with `\n`.
    #[default]
    WithNewline,
    /// Write the rendered message as-is.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode terminates rendered messages with a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Returns the text written after each rendered message.
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert_eq!(LineMode::WithNewline.terminator(), "\n");
    /// assert_eq!(LineMode::WithoutNewline.terminator(), "");
    /// ```
    #[must_use]
    pub const fn terminator(self) -> &'static str {
        if self.append_newline() { "\n" } else { "" }
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}

#[cfg(test)]
mod tests;
