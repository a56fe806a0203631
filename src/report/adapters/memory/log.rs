//! In-memory implementation of the [`ReportLog`] port.

use std::sync::RwLock;

use crate::report::ports::log::ReportLog;

/// In-memory implementation of [`ReportLog`].
///
/// Thread-safe via internal [`RwLock`]. Suitable for unit tests only.
#[derive(Debug, Default)]
pub struct RecordingLog {
    entries: RwLock<Vec<String>>,
}

impl RecordingLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded lines, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Returns `true` if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .read()
            .map(|entries| entries.is_empty())
            .unwrap_or(true)
    }
}

impl ReportLog for RecordingLog {
    fn error(&self, message: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(message.to_owned());
        }
    }
}
