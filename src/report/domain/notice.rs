//! The formatted notice delivered back to chat.

use serde::{Deserialize, Serialize};

use super::context::CommandContext;
use super::severity::Severity;

/// A single-field chat notice, ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    /// Display colour, taken from the severity style.
    pub color: u32,
    /// Body text: the severity glyph followed by the message in inline code.
    pub body: String,
    /// Optional "Learn more" footer.
    pub footer: Option<String>,
}

impl ErrorNotice {
    /// Composes the notice for `severity` wrapping `text`.
    ///
    /// The footer is appended when the caller forces it or the severity
    /// defaults to one, and only when the context resolved a qualified
    /// command name to point the footer at.
    #[must_use]
    pub fn compose(
        severity: Severity,
        text: &str,
        force_help_footer: bool,
        ctx: &CommandContext,
    ) -> Self {
        let style = severity.style();
        let footer = (force_help_footer || style.help_footer)
            .then(|| ctx.help_footer())
            .flatten();

        Self {
            color: style.color,
            body: format!("{} `{text}`", style.glyph),
            footer,
        }
    }
}
