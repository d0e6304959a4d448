//! Bridge from delivered messages to `tracing` events.
//!
//! Each non-empty message becomes one event under [`TRACING_TARGET`] with the
//! message text as the event message and the provenance recorded in the
//! `source` and `line` fields. Subscribers installed by the application decide
//! how the events are filtered and formatted.

use message::Message;
use tracing::Level;

use super::Sink;

/// Target used for every event emitted by [`TracingSink`].
pub const TRACING_TARGET: &str = "quill::message";

macro_rules! emit {
    ($macro:ident, $message:expr) => {
        ::tracing::$macro!(
            target: TRACING_TARGET,
            source = $message.source(),
            line = $message.line(),
            "{}",
            $message.text()
        )
    };
}

/// Sink that re-emits messages as `tracing` events at a fixed level.
///
/// # Examples
///
/// ```
/// use logging_sink::{ScopedMessage, TracingSink};
/// use tracing::Level;
///
/// let sink = TracingSink::with_level(Level::WARN);
/// let mut scoped = ScopedMessage::new(&sink);
/// scoped.append("disk almost full");
/// // Emitted as a WARN event under `quill::message` when `scoped` drops.
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TracingSink {
    level: Level,
}

impl TracingSink {
    /// Creates a sink emitting `INFO` events.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_level(Level::INFO)
    }

    /// Creates a sink emitting events at `level`.
    #[must_use]
    pub const fn with_level(level: Level) -> Self {
        Self { level }
    }

    /// Returns the level events are emitted at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for TracingSink {
    fn write(&self, message: &Message) {
        if message.is_empty() {
            return;
        }

        match self.level {
            Level::ERROR => emit!(error, message),
            Level::WARN => emit!(warn, message),
            Level::INFO => emit!(info, message),
            Level::DEBUG => emit!(debug, message),
            Level::TRACE => emit!(trace, message),
        }
    }
}
