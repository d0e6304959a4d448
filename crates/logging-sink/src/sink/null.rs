use message::Message;

use super::Sink;

/// Sink that discards every message.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl Sink for NullSink {
    #[inline]
    fn write(&self, _message: &Message) {}
}
