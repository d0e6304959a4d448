use std::fmt::{self, Write as _};

use super::Message;

impl Message {
    /// Appends the display form of `value` to the text.
    ///
    /// Returns `self` so insertions can be chained the way values are pushed
    /// into an output stream.
    ///
    /// ```
    /// use message::Message;
    ///
    /// let mut message = Message::new();
    /// message.append("value=").append(42).append(' ').append(1.5);
    /// assert_eq!(message.text(), "value=42 1.5");
    /// ```
    pub fn append<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        // Writing into a `String` cannot fail.
        let _ = write!(self.text, "{value}");
        self
    }
}

impl fmt::Write for Message {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.text.push(c);
        Ok(())
    }
}
