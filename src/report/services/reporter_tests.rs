//! Unit tests for the reporter's branch selection and fallback chains.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::{Sequence, mock};

use super::ErrorReporter;
use crate::report::domain::{
    ChannelId, CommandContext, CommandError, Destination, ErrorNotice, MessageId, UserId,
};
use crate::report::ports::log::ReportLog;
use crate::report::ports::messenger::{ChatMessenger, SendError, SendResult};

mock! {
    Messenger {}

    #[async_trait]
    impl ChatMessenger for Messenger {
        async fn send_notice(&self, destination: Destination, notice: ErrorNotice) -> SendResult<()>;
        async fn react(&self, channel: ChannelId, message: MessageId, emoji: &str) -> SendResult<()>;
    }
}

mock! {
    Log {}

    impl ReportLog for Log {
        fn error(&self, message: &str);
    }
}

fn context() -> CommandContext {
    CommandContext::new(
        ChannelId::new(1),
        UserId::new(2),
        MessageId::new(3),
        "!play loud",
        "!",
    )
    .with_command("play")
}

fn reporter(messenger: MockMessenger, log: MockLog) -> ErrorReporter<MockMessenger, MockLog> {
    ErrorReporter::new(Arc::new(messenger), Arc::new(log))
}

#[tokio::test]
async fn ignored_kinds_touch_neither_port() {
    let mut messenger = MockMessenger::new();
    messenger.expect_send_notice().never();
    messenger.expect_react().never();
    let mut log = MockLog::new();
    log.expect_error().never();

    let service = reporter(messenger, log);
    service.report(&context(), &CommandError::NotFound).await;
    service.report(&context(), &CommandError::Disabled).await;
}

#[tokio::test]
async fn forbidden_send_falls_back_to_reaction() {
    let mut messenger = MockMessenger::new();
    messenger
        .expect_send_notice()
        .times(1)
        .returning(|_, _| Err(SendError::forbidden("cannot post")));
    messenger
        .expect_react()
        .withf(|channel, message, emoji| {
            *channel == ChannelId::new(1) && *message == MessageId::new(3) && emoji == "\u{1f64a}"
        })
        .times(1)
        .returning(|_, _, _| Ok(()));

    // Exactly the suppressed-send line; the chain ends at the reaction.
    let mut log = MockLog::new();
    log.expect_error()
        .withf(|line| line.contains("forbidden"))
        .times(1)
        .return_const(());

    let service = reporter(messenger, log);
    service
        .report(&context(), &CommandError::Forbidden("missing access".to_owned()))
        .await;
}

#[tokio::test]
async fn doubly_forbidden_escalates_to_unhandled() {
    let mut seq = Sequence::new();
    let mut messenger = MockMessenger::new();
    messenger
        .expect_send_notice()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(SendError::forbidden("cannot post")));
    messenger
        .expect_react()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _, _| Err(SendError::forbidden("cannot react")));
    messenger
        .expect_send_notice()
        .withf(|_, notice| notice.body.contains("Forbidden: missing access"))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, _| Ok(()));

    // Suppressed send, then the two unhandled-path lines.
    let mut log = MockLog::new();
    log.expect_error().times(3).return_const(());

    let service = reporter(messenger, log);
    service
        .report(&context(), &CommandError::Forbidden("missing access".to_owned()))
        .await;
}

#[tokio::test]
async fn non_permission_send_failure_stops_the_chain() {
    let mut messenger = MockMessenger::new();
    messenger
        .expect_send_notice()
        .times(1)
        .returning(|_, _| Err(SendError::http(502, "gateway hiccup")));
    messenger.expect_react().never();
    let mut log = MockLog::new();
    log.expect_error().never();

    let service = reporter(messenger, log);
    service
        .report(&context(), &CommandError::Forbidden("missing access".to_owned()))
        .await;
}

#[tokio::test]
async fn guild_only_goes_to_the_author_and_fails_silently() {
    let mut messenger = MockMessenger::new();
    messenger
        .expect_send_notice()
        .withf(|destination, _| *destination == Destination::User(UserId::new(2)))
        .times(1)
        .returning(|_, _| Err(SendError::forbidden("direct messages closed")));
    messenger.expect_react().never();
    let mut log = MockLog::new();
    log.expect_error().never();

    let service = reporter(messenger, log);
    service.report(&context(), &CommandError::GuildOnly).await;
}

#[tokio::test]
async fn wrapped_errors_are_classified_by_their_cause() {
    let mut messenger = MockMessenger::new();
    messenger
        .expect_send_notice()
        .withf(|destination, notice| {
            *destination == Destination::Channel(ChannelId::new(1))
                && notice.body.contains("too loud")
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let mut log = MockLog::new();
    log.expect_error().never();

    let service = reporter(messenger, log);
    let wrapped = CommandError::invoke(CommandError::Warning("too loud".to_owned()));
    service.report(&context(), &wrapped).await;
}
