use super::Message;
use crate::line::validate_line;
use crate::{InvalidLineError, SourceRoot, normalize_source};

impl Message {
    /// Replaces the text, or clears it when `text` is `None`.
    ///
    /// ```
    /// use message::Message;
    ///
    /// let mut message = Message::new();
    /// message.set_text("ready");
    /// assert_eq!(message.text(), "ready");
    ///
    /// message.set_text(None);
    /// assert!(message.is_empty());
    /// ```
    pub fn set_text<'t>(&mut self, text: impl Into<Option<&'t str>>) -> &mut Self {
        self.text.clear();
        if let Some(text) = text.into() {
            self.text.push_str(text);
        }
        self
    }

    /// Records the source file, normalized against the build-configured root.
    ///
    /// See [`normalize_source`] for the normalization rules and
    /// [`SourceRoot::configured`] for where the root comes from. `None` clears
    /// the source.
    pub fn set_source<'p>(&mut self, path: impl Into<Option<&'p str>>) -> &mut Self {
        self.set_source_with(path, SourceRoot::configured())
    }

    /// Records the source file, normalized against an explicit `root`.
    ///
    /// ```
    /// use message::{Message, SourceRoot};
    ///
    /// let mut message = Message::new();
    /// message.set_source_with(r"C:\proj\Source\Common\Utility.cpp", &SourceRoot::new("Source/"));
    /// assert_eq!(message.source(), "Common/Utility.cpp");
    /// ```
    pub fn set_source_with<'p>(
        &mut self,
        path: impl Into<Option<&'p str>>,
        root: &SourceRoot,
    ) -> &mut Self {
        self.source = path
            .into()
            .map(|path| normalize_source(path, root))
            .unwrap_or_default();
        self
    }

    /// Records the source line.
    ///
    /// # Panics
    ///
    /// Panics when `line` is not positive or does not fit in a `u32`. Both
    /// indicate a mistake at the call site; use
    /// [`try_set_line`](Self::try_set_line) when the value is not trusted.
    ///
    /// ```should_panic
    /// use message::Message;
    ///
    /// Message::new().set_line(0);
    /// ```
    #[track_caller]
    pub fn set_line<L: Into<i64>>(&mut self, line: L) -> &mut Self {
        match self.try_set_line(line) {
            Ok(message) => message,
            Err(error) => panic!("attempted to set an invalid source line: {error}"),
        }
    }

    /// Records the source line, rejecting values [`set_line`](Self::set_line)
    /// would panic on.
    ///
    /// The message is left unchanged on error.
    pub fn try_set_line<L: Into<i64>>(&mut self, line: L) -> Result<&mut Self, InvalidLineError> {
        self.line = validate_line(line.into())?;
        Ok(self)
    }
}
