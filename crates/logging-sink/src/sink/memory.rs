use std::sync::{Mutex, MutexGuard, PoisonError};

use message::{Message, MessageRecord};

use super::Sink;

/// Sink that keeps a [`MessageRecord`] for every delivered message.
///
/// Empty messages are recorded too, which makes the sink suitable for
/// counting deliveries. Records are kept in delivery order.
///
/// # Examples
///
/// ```
/// use logging_sink::{MemorySink, ScopedMessage};
///
/// let sink = MemorySink::new();
/// ScopedMessage::new(&sink).append("first");
/// ScopedMessage::new(&sink).append("second");
///
/// let texts: Vec<_> = sink.drain().into_iter().map(|record| record.text).collect();
/// assert_eq!(texts, ["first", "second"]);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<MessageRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<MessageRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of every record received so far.
    #[must_use]
    pub fn records(&self) -> Vec<MessageRecord> {
        self.lock().clone()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<MessageRecord> {
        self.lock().last().cloned()
    }

    /// Returns the number of deliveries received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no delivery has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns every record received so far.
    pub fn drain(&self) -> Vec<MessageRecord> {
        std::mem::take(&mut *self.lock())
    }

    /// Consumes the sink and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write(&self, message: &Message) {
        self.lock().push(message.to_record());
    }
}
