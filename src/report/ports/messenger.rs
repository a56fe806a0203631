//! Outbound messaging port.
//!
//! The messenger delivers composed notices and emoji reactions to the chat
//! platform, surfacing permission failures as values the reporter's fallback
//! chains can key on.

use async_trait::async_trait;
use thiserror::Error;

use crate::report::domain::{ChannelId, Destination, ErrorNotice, MessageId};

/// Result type for messenger operations.
pub type SendResult<T> = Result<T, SendError>;

/// Failures surfaced by the chat platform while delivering.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The bot lacks the rights to perform this action here.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Any other messaging-layer failure.
    #[error("messaging request failed with status {status}: {reason}")]
    Http {
        /// Platform status code.
        status: u16,
        /// Platform-supplied failure description.
        reason: String,
    },
}

impl SendError {
    /// Creates a permission failure.
    #[must_use]
    pub fn forbidden(reason: impl Into<String>) -> Self {
        Self::Forbidden(reason.into())
    }

    /// Creates a general messaging-layer failure.
    #[must_use]
    pub fn http(status: u16, reason: impl Into<String>) -> Self {
        Self::Http {
            status,
            reason: reason.into(),
        }
    }

    /// Returns `true` for permission failures.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }
}

/// Port for outbound chat deliveries.
///
/// Implementations wrap the platform client. They must be safe for
/// concurrent use; the reporter holds one handle across all invocations and
/// never mutates it.
#[async_trait]
pub trait ChatMessenger: Send + Sync {
    /// Delivers a composed notice to a channel or a user's direct messages.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Forbidden`] when the bot may not post at the
    /// destination, and [`SendError::Http`] for any other delivery failure.
    async fn send_notice(&self, destination: Destination, notice: ErrorNotice) -> SendResult<()>;

    /// Attaches an emoji reaction to an existing message.
    ///
    /// # Errors
    ///
    /// Returns [`SendError::Forbidden`] when the bot may not react to the
    /// message, and [`SendError::Http`] for any other delivery failure.
    async fn react(&self, channel: ChannelId, message: MessageId, emoji: &str) -> SendResult<()>;
}
