//! Application services for the report subsystem.
//!
//! Services wire the classification logic to the outbound ports and expose
//! the inbound listener the host framework drives.

mod reporter;

#[cfg(test)]
mod reporter_tests;

pub use reporter::ErrorReporter;
