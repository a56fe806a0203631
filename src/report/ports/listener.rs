//! Inbound listener port driven by the host framework.

use async_trait::async_trait;

use crate::report::domain::{CommandContext, CommandError};

/// Port the host bot invokes once per failed command invocation.
///
/// The host registers a single listener at startup and dispatches each
/// failure independently; invocations may run concurrently and must not
/// block one another.
#[async_trait]
pub trait CommandErrorListener: Send + Sync {
    /// Handles one failed command invocation.
    ///
    /// This is a terminal handler: it never fails and never re-raises.
    /// Failures encountered while reporting degrade internally to a log
    /// line, a reaction, or silence.
    async fn on_command_error(&self, ctx: &CommandContext, error: &CommandError);
}
