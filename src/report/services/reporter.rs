//! The error classifier and reporter service.
//!
//! One [`ErrorReporter`] instance is registered with the host framework at
//! startup and handles every failed command invocation for the lifetime of
//! the bot. Classification is a fixed priority table; each branch performs
//! at most one outbound send, with the fallbacks spelt out per branch.

use std::sync::Arc;

use async_trait::async_trait;

use crate::report::domain::{CommandContext, CommandError, Destination, ErrorNotice, Severity};
use crate::report::ports::listener::CommandErrorListener;
use crate::report::ports::log::ReportLog;
use crate::report::ports::messenger::{ChatMessenger, SendError, SendResult};

/// Reaction attached when the bot cannot even say that it cannot speak.
const MUTED_REACTION: &str = "\u{1f64a}";

/// Fixed notice for owner-restricted commands.
const OWNER_ONLY_TEXT: &str = "Only my creator can use this command!";

/// Fixed notice for server-only commands invoked in private messages.
const GUILD_ONLY_TEXT: &str = "This command cannot be used in private messages";

/// Classifies failed command invocations and reports them to chat.
///
/// The reporter is a terminal handler: it owns no state beyond its two port
/// handles, never fails, and produces at most one chat notice per event.
/// Handles are shared read-only, so one instance serves concurrent
/// invocations without locking.
#[derive(Clone)]
pub struct ErrorReporter<M, L>
where
    M: ChatMessenger,
    L: ReportLog,
{
    messenger: Arc<M>,
    log: Arc<L>,
}

impl<M, L> ErrorReporter<M, L>
where
    M: ChatMessenger,
    L: ReportLog,
{
    /// Creates a reporter wired to the given ports.
    #[must_use]
    pub const fn new(messenger: Arc<M>, log: Arc<L>) -> Self {
        Self { messenger, log }
    }

    /// Classifies `error` and reports it, performing at most one outbound
    /// send. Dispatcher wrappers are unwrapped one layer before matching;
    /// the first matching branch wins.
    pub async fn report(&self, ctx: &CommandContext, error: &CommandError) {
        let cause = error.unwrapped();

        match cause {
            // Silently ignored kinds: no send, no log.
            CommandError::NotFound | CommandError::Disabled => {}

            CommandError::Info(text) => {
                self.send(ctx, ctx.reply_destination(), Severity::Info, text, false)
                    .await
                    .ok();
            }

            CommandError::Warning(text) => {
                self.send(ctx, ctx.reply_destination(), Severity::Warning, text, false)
                    .await
                    .ok();
            }

            CommandError::NotOwner => {
                self.send(
                    ctx,
                    ctx.reply_destination(),
                    Severity::Info,
                    OWNER_ONLY_TEXT,
                    false,
                )
                .await
                .ok();
            }

            // Delivered to the author directly; any failure of that direct
            // send is dropped without logging or fallback.
            CommandError::GuildOnly => {
                let notice = ErrorNotice::compose(Severity::Info, GUILD_ONLY_TEXT, false, ctx);
                self.messenger
                    .send_notice(ctx.author_destination(), notice)
                    .await
                    .ok();
            }

            CommandError::UnknownSubcommand { passed } => {
                let text = format!("Invalid subcommand \"{passed}\"");
                self.send(ctx, ctx.reply_destination(), Severity::Warning, &text, false)
                    .await
                    .ok();
            }

            // Help footer forced on, overriding the warning default.
            CommandError::MissingArgument { .. } => {
                self.send(
                    ctx,
                    ctx.reply_destination(),
                    Severity::Warning,
                    &cause.to_string(),
                    true,
                )
                .await
                .ok();
            }

            CommandError::Forbidden(reason) => self.report_forbidden(ctx, cause, reason).await,

            CommandError::UserInput(text) => {
                self.send(ctx, ctx.reply_destination(), Severity::Warning, text, false)
                    .await
                    .ok();
            }

            unmatched => self.unhandled(ctx, unmatched).await,
        }
    }

    /// Shared send operation: composes the notice and delivers it.
    ///
    /// A permission failure is logged as a suppressed send and returned as a
    /// value for callers that chain a fallback on it; every other failure is
    /// returned untouched.
    ///
    /// # Errors
    ///
    /// Returns the messenger's [`SendError`] verbatim.
    async fn send(
        &self,
        ctx: &CommandContext,
        destination: Destination,
        severity: Severity,
        text: &str,
        force_help_footer: bool,
    ) -> SendResult<()> {
        let notice = ErrorNotice::compose(severity, text, force_help_footer, ctx);
        let result = self.messenger.send_notice(destination, notice).await;

        if result.as_ref().err().is_some_and(SendError::is_forbidden) {
            self.log
                .error("forbidden when trying to send error notice");
        }

        result
    }

    /// Reports a platform permission failure raised by the command itself.
    ///
    /// Attempt sequence: send the error notice; on a permission failure,
    /// react to the invoking message instead; if even the reaction is
    /// refused, escalate to the unhandled path. Non-permission failures stop
    /// the chain.
    async fn report_forbidden(&self, ctx: &CommandContext, cause: &CommandError, reason: &str) {
        let sent = self
            .send(ctx, ctx.reply_destination(), Severity::Error, reason, false)
            .await;
        if !matches!(sent, Err(SendError::Forbidden(_))) {
            return;
        }

        let reacted = self
            .messenger
            .react(ctx.channel, ctx.message, MUTED_REACTION)
            .await;
        if matches!(reacted, Err(SendError::Forbidden(_))) {
            self.unhandled(ctx, cause).await;
        }
    }

    /// Default path for anything no branch claimed: two error-level log
    /// lines (the offending command text, then the backtrace or rendered
    /// error), followed by a plain `Kind: message` notice to chat.
    async fn unhandled(&self, ctx: &CommandContext, cause: &CommandError) {
        self.log
            .error(&format!("unhandled error in command \"{}\":", ctx.content));
        cause.trace().map_or_else(
            || self.log.error(&cause.to_string()),
            |trace| self.log.error(trace),
        );

        let text = format!("{}: {}", cause.kind_name(), cause);
        self.send(ctx, ctx.reply_destination(), Severity::Error, &text, false)
            .await
            .ok();
    }
}

#[async_trait]
impl<M, L> CommandErrorListener for ErrorReporter<M, L>
where
    M: ChatMessenger,
    L: ReportLog,
{
    async fn on_command_error(&self, ctx: &CommandContext, error: &CommandError) {
        self.report(ctx, error).await;
    }
}
