//! Port trait definitions for the report subsystem.
//!
//! Ports define the abstract interfaces the classifier requires from
//! infrastructure. Adapters implement these ports to connect the domain to
//! the chat platform and the logging backend, and the host framework drives
//! the inbound listener port.

pub mod listener;
pub mod log;
pub mod messenger;

pub use listener::CommandErrorListener;
pub use log::ReportLog;
pub use messenger::{ChatMessenger, SendError, SendResult};
