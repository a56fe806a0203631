//! In-memory implementation of the [`ChatMessenger`] port.
//!
//! Provides a simple, thread-safe adapter for unit testing without a live
//! chat platform.

use std::collections::VecDeque;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::report::domain::{ChannelId, Destination, ErrorNotice, MessageId};
use crate::report::ports::messenger::{ChatMessenger, SendError, SendResult};

/// Record of one delivered notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentNotice {
    /// Where the notice was delivered.
    pub destination: Destination,
    /// The notice as composed by the reporter.
    pub notice: ErrorNotice,
}

/// Record of one delivered reaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentReaction {
    /// Channel holding the reacted-to message.
    pub channel: ChannelId,
    /// The reacted-to message.
    pub message: MessageId,
    /// The emoji attached.
    pub emoji: String,
}

/// In-memory implementation of [`ChatMessenger`].
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
/// Deliveries succeed unless a failure has been primed with
/// [`RecordingMessenger::fail_next_send`] or
/// [`RecordingMessenger::fail_next_react`]; primed failures are consumed in
/// FIFO order, one per attempt.
#[derive(Debug, Default)]
pub struct RecordingMessenger {
    state: RwLock<MessengerState>,
}

#[derive(Debug, Default)]
struct MessengerState {
    sent: Vec<SentNotice>,
    reactions: Vec<SentReaction>,
    send_failures: VecDeque<SendError>,
    react_failures: VecDeque<SendError>,
}

impl RecordingMessenger {
    /// Creates a messenger with no recorded traffic and no primed failures.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primes the next notice delivery to fail with `error`.
    pub fn fail_next_send(&self, error: SendError) {
        if let Ok(mut state) = self.state.write() {
            state.send_failures.push_back(error);
        }
    }

    /// Primes the next reaction delivery to fail with `error`.
    pub fn fail_next_react(&self, error: SendError) {
        if let Ok(mut state) = self.state.write() {
            state.react_failures.push_back(error);
        }
    }

    /// Returns all successfully delivered notices, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<SentNotice> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }

    /// Returns all successfully delivered reactions, oldest first.
    #[must_use]
    pub fn reactions(&self) -> Vec<SentReaction> {
        self.state
            .read()
            .map(|state| state.reactions.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatMessenger for RecordingMessenger {
    async fn send_notice(&self, destination: Destination, notice: ErrorNotice) -> SendResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| SendError::http(500, "recording messenger lock poisoned"))?;

        if let Some(error) = state.send_failures.pop_front() {
            return Err(error);
        }

        state.sent.push(SentNotice {
            destination,
            notice,
        });
        Ok(())
    }

    async fn react(&self, channel: ChannelId, message: MessageId, emoji: &str) -> SendResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| SendError::http(500, "recording messenger lock poisoned"))?;

        if let Some(error) = state.react_failures.pop_front() {
            return Err(error);
        }

        state.reactions.push(SentReaction {
            channel,
            message,
            emoji: emoji.to_owned(),
        });
        Ok(())
    }
}
