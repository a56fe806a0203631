//! Adapters for the report subsystem.
//!
//! Concrete implementations of the outbound ports, following hexagonal
//! architecture principles. The domain and service layers never depend on
//! anything in this module.
//!
//! # Available Adapters
//!
//! - [`memory::RecordingMessenger`] / [`memory::RecordingLog`]: Thread-safe
//!   in-memory implementations for unit testing, with failure injection
//! - [`tracing::TracingReportLog`]: Production log adapter forwarding to the
//!   `tracing` ecosystem

pub mod memory;
pub mod tracing;
