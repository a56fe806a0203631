//! Severity levels and their presentation table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a reported command failure.
///
/// Each level maps to a fixed [`SeverityStyle`] governing how the notice is
/// rendered in chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational notice; gentle, no stack detail.
    Info,
    /// Recoverable user mistake; offers the help footer by default.
    Warning,
    /// Something went wrong inside the bot or the platform.
    Error,
}

/// Presentation attributes for one severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    /// Glyph shortcode prepended to the notice body.
    pub glyph: &'static str,
    /// Display colour of the rendered notice.
    pub color: u32,
    /// Whether the help footer is appended when the caller does not force it.
    pub help_footer: bool,
}

const INFO_STYLE: SeverityStyle = SeverityStyle {
    glyph: ":information_source:",
    color: 0x3B_88C3,
    help_footer: false,
};

const WARNING_STYLE: SeverityStyle = SeverityStyle {
    glyph: ":warning:",
    color: 0xFF_CC4D,
    help_footer: true,
};

const ERROR_STYLE: SeverityStyle = SeverityStyle {
    glyph: ":no_entry:",
    color: 0xBE_1931,
    help_footer: false,
};

impl Severity {
    /// Returns the presentation attributes for this level.
    #[must_use]
    pub const fn style(self) -> &'static SeverityStyle {
        match self {
            Self::Info => &INFO_STYLE,
            Self::Warning => &WARNING_STYLE,
            Self::Error => &ERROR_STYLE,
        }
    }

    /// Returns the canonical name of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
