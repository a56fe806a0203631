//! [`ReportLog`] adapter forwarding to the `tracing` ecosystem.

use crate::report::ports::log::ReportLog;

/// Production log adapter emitting through [`tracing::error!`].
///
/// Stateless; clone or copy freely. The host's subscriber decides where the
/// lines end up.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReportLog;

impl TracingReportLog {
    /// Creates the adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportLog for TracingReportLog {
    fn error(&self, message: &str) {
        tracing::error!(target: "herald::report", "{message}");
    }
}
