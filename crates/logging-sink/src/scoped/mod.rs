use std::fmt;
use std::ops::{Deref, DerefMut};

use message::Message;

use crate::sink::Sink;


/// Message under construction that is delivered to its sink when dropped.
///
/// A scoped message starts armed: it owns an empty [`Message`] and borrows a
/// [`Sink`]. Text and provenance are added through [`Deref`]/[`DerefMut`] to
/// the message or through [`fmt::Write`]. When the scoped message goes out of
/// scope, on a normal exit, an early return or while a panic unwinds, the
/// message is handed to [`Sink::write`] exactly once. Empty messages are
/// delivered too; the sink decides whether to keep them.
///
/// [`transfer`](Self::transfer) moves the pending delivery to a new instance
/// and disarms the original, which then drops without delivering. A disarmed
/// scoped message never becomes armed again.
///
/// # Examples
///
/// Deliver on scope exit:
///
/// ```
/// use std::fmt::Write as _;
/// use logging_sink::{MemorySink, ScopedMessage};
///
/// let sink = MemorySink::new();
/// {
///     let mut scoped = ScopedMessage::new(&sink);
///     write!(scoped, "{} of {}", 3, 4).unwrap();
///     assert!(sink.is_empty());
/// }
/// assert_eq!(sink.records()[0].text, "3 of 4");
/// ```
///
/// Hand the pending delivery to a callee:
///
/// ```
/// use logging_sink::{MemorySink, ScopedMessage, Sink};
///
/// fn finish<S: Sink + ?Sized>(mut scoped: ScopedMessage<'_, S>) {
///     scoped.append(" done");
/// }
///
/// let sink = MemorySink::new();
/// let mut scoped = ScopedMessage::new(&sink);
/// scoped.append("step");
/// finish(scoped.transfer());
/// assert!(!scoped.is_armed());
/// drop(scoped);
///
/// assert_eq!(sink.len(), 1);
/// assert_eq!(sink.records()[0].text, "step done");
/// ```
#[must_use = "dropping a scoped message immediately delivers it"]
pub struct ScopedMessage<'a, S>
where
    S: Sink + ?Sized,
{
    message: Message,
    sink: Option<&'a S>,
}

impl<'a, S> ScopedMessage<'a, S>
where
    S: Sink + ?Sized,
{
    /// Creates an armed scoped message bound to `sink`.
    pub const fn new(sink: &'a S) -> Self {
        Self {
            message: Message::new(),
            sink: Some(sink),
        }
    }

    /// Creates an armed scoped message from an optional sink handle.
    ///
    /// # Panics
    ///
    /// Panics when `sink` is `None`. A scoped message without a sink could
    /// never deliver, which is a mistake at the call site.
    #[track_caller]
    pub fn from_option(sink: Option<&'a S>) -> Self {
        match sink {
            Some(sink) => Self::new(sink),
            None => panic!("attempted to create a scoped message with no sink"),
        }
    }

    /// Moves the message and the pending delivery into a new scoped message.
    ///
    /// `self` is left disarmed with an empty message and delivers nothing
    /// when dropped. Transferring from an already disarmed instance yields
    /// another disarmed instance.
    pub fn transfer(&mut self) -> Self {
        Self {
            message: self.message.take(),
            sink: self.sink.take(),
        }
    }

    /// Reports whether dropping this instance will deliver the message.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.sink.is_some()
    }

    /// Borrows the message under construction.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Mutably borrows the message under construction.
    pub fn message_mut(&mut self) -> &mut Message {
        &mut self.message
    }
}

impl<S> Drop for ScopedMessage<'_, S>
where
    S: Sink + ?Sized,
{
    fn drop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.write(&self.message);
        }
    }
}

impl<S> Deref for ScopedMessage<'_, S>
where
    S: Sink + ?Sized,
{
    type Target = Message;

    fn deref(&self) -> &Self::Target {
        &self.message
    }
}

impl<S> DerefMut for ScopedMessage<'_, S>
where
    S: Sink + ?Sized,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.message
    }
}

impl<S> fmt::Write for ScopedMessage<'_, S>
where
    S: Sink + ?Sized,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        fmt::Write::write_str(&mut self.message, s)
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        fmt::Write::write_char(&mut self.message, c)
    }
}

impl<S> fmt::Debug for ScopedMessage<'_, S>
where
    S: Sink + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedMessage")
            .field("message", &self.message)
            .field("armed", &self.is_armed())
            .finish()
    }
}
