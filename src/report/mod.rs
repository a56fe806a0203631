//! Error classification and reporting for failed chat commands.
//!
//! The host bot framework raises one event per failed command invocation.
//! This module classifies the failure against a fixed priority table and
//! produces at most one outbound chat notice plus optional error-level log
//! lines. Failures encountered while reporting degrade through explicit
//! one-step fallbacks and are never propagated back to the host.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::Severity`],
//!   [`domain::CommandError`], [`domain::ErrorNotice`], etc.)
//! - **Ports**: Abstract trait interfaces ([`ports::messenger::ChatMessenger`],
//!   [`ports::log::ReportLog`], [`ports::listener::CommandErrorListener`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::RecordingMessenger`],
//!   [`adapters::tracing::TracingReportLog`])
//! - **Services**: The [`services::ErrorReporter`] classifier wired to its
//!   ports at construction
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use herald::report::adapters::memory::{RecordingLog, RecordingMessenger};
//! use herald::report::domain::{ChannelId, CommandContext, CommandError, MessageId, UserId};
//! use herald::report::services::ErrorReporter;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let messenger = Arc::new(RecordingMessenger::new());
//! let log = Arc::new(RecordingLog::new());
//! let reporter = ErrorReporter::new(Arc::clone(&messenger), log);
//!
//! let ctx = CommandContext::new(
//!     ChannelId::new(100),
//!     UserId::new(200),
//!     MessageId::new(300),
//!     "!stats weekly",
//!     "!",
//! )
//! .with_command("stats");
//!
//! reporter
//!     .report(&ctx, &CommandError::Warning("nothing to report yet".to_owned()))
//!     .await;
//! assert_eq!(messenger.sent().len(), 1);
//! # }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
