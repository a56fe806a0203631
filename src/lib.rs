//! Herald: command error reporting for chat bots.
//!
//! This crate provides the error-reporting subsystem of a chat bot: it
//! receives failed command invocations from the host framework, classifies
//! each failure, and delivers at most one formatted notice back to chat,
//! writing error-level log lines for anything unexpected.
//!
//! # Architecture
//!
//! Herald follows hexagonal architecture principles:
//!
//! - **Domain**: Pure classification and formatting logic with no
//!   infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (chat platform, logging)
//!
//! # Modules
//!
//! - [`report`]: Error classification, notice composition, and delivery

pub mod report;
