use std::rc::Rc;
use std::sync::Arc;

use message::Message;

mod memory;
mod message_sink;
mod null;
mod tracing_sink;

pub use memory::MemorySink;
pub use message_sink::MessageSink;
pub use null::NullSink;
pub use tracing_sink::{TRACING_TARGET, TracingSink};

/// Destination that accepts finished [`Message`] values.
///
/// [`ScopedMessage`](crate::ScopedMessage) calls [`write`](Self::write) once
/// when an armed instance is dropped. Implementations decide what to do with
/// the message, including whether to discard empty ones.
///
/// Implementations must not panic and must not report failures to the caller:
/// a failed delivery is the sink's own concern, typically logged through
/// `tracing`. When a sink is shared across threads, it is responsible for
/// serializing concurrent calls.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use logging_sink::{ScopedMessage, Sink};
/// use message::Message;
///
/// #[derive(Default)]
/// struct Counter(AtomicUsize);
///
/// impl Sink for Counter {
///     fn write(&self, _message: &Message) {
///         self.0.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let counter = Counter::default();
/// drop(ScopedMessage::new(&counter));
/// assert_eq!(counter.0.load(Ordering::Relaxed), 1);
/// ```
pub trait Sink {
    /// Accepts a finished message for delivery.
    fn write(&self, message: &Message);
}

impl<S> Sink for &S
where
    S: Sink + ?Sized,
{
    fn write(&self, message: &Message) {
        (**self).write(message);
    }
}

impl<S> Sink for Box<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, message: &Message) {
        (**self).write(message);
    }
}

impl<S> Sink for Rc<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, message: &Message) {
        (**self).write(message);
    }
}

impl<S> Sink for Arc<S>
where
    S: Sink + ?Sized,
{
    fn write(&self, message: &Message) {
        (**self).write(message);
    }
}
