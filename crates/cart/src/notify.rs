//! User-facing notifications for failed cart operations.
//!
//! Fire-and-forget: a notifier never reports back and never fails.

use std::sync::{Mutex, PoisonError};

/// Sink for human-readable warning messages.
pub trait Notifier {
    fn warn(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn warn(&self, message: &str) {
        (**self).warn(message);
    }
}

/// Emits each message as a `tracing` warning event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "rocket_cart::notify", "{message}");
    }
}

/// Keeps every message, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the messages received so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for RecordingNotifier {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
