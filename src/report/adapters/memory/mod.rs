//! In-memory adapters for unit testing.
//!
//! Both adapters record everything they are handed and can be primed with
//! failures, so tests can observe exactly what the reporter delivered and
//! drive its fallback chains without a live chat platform.

mod log;
mod messenger;

pub use log::RecordingLog;
pub use messenger::{RecordingMessenger, SentNotice, SentReaction};
