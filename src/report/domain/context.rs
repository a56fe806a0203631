//! Invocation context supplied by the host framework.

use serde::{Deserialize, Serialize};

use super::ids::{ChannelId, MessageId, UserId};

/// Where a notice is delivered: a channel or a user's direct messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// The channel the command was invoked in.
    Channel(ChannelId),
    /// A user's direct messages.
    User(UserId),
}

/// Read-only view of one command invocation, owned by the host.
///
/// The reporter only ever reads from this; the qualified command name may be
/// absent when the dispatcher could not resolve the invoked name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    /// Channel the command was invoked in.
    pub channel: ChannelId,
    /// Author of the invoking message.
    pub author: UserId,
    /// The invoking message itself.
    pub message: MessageId,
    /// Raw text of the invoking message.
    pub content: String,
    /// Command prefix in effect for this invocation.
    pub prefix: String,
    /// Qualified name of the resolved command, when resolution succeeded.
    pub command: Option<String>,
}

impl CommandContext {
    /// Creates a context for an invocation whose command is not yet resolved.
    #[must_use]
    pub fn new(
        channel: ChannelId,
        author: UserId,
        message: MessageId,
        content: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            author,
            message,
            content: content.into(),
            prefix: prefix.into(),
            command: None,
        }
    }

    /// Sets the qualified name of the resolved command.
    #[must_use]
    pub fn with_command(mut self, name: impl Into<String>) -> Self {
        self.command = Some(name.into());
        self
    }

    /// Destination for replies: the invoking channel.
    #[must_use]
    pub const fn reply_destination(&self) -> Destination {
        Destination::Channel(self.channel)
    }

    /// Destination for direct messages to the author.
    #[must_use]
    pub const fn author_destination(&self) -> Destination {
        Destination::User(self.author)
    }

    /// Builds the help-footer text for the resolved command.
    ///
    /// Returns `None` when the command name could not be resolved.
    #[must_use]
    pub fn help_footer(&self) -> Option<String> {
        self.command
            .as_deref()
            .map(|name| format!("Learn more: {}help {}", self.prefix, name))
    }
}
