//! The command failure event raised by the host framework.

use std::backtrace::Backtrace;
use thiserror::Error;

/// One failed command invocation, tagged by kind.
///
/// The host constructs a value of this type per failure and hands it to the
/// reporter together with the invocation context. Kinds with no dedicated
/// variant are wrapped via [`CommandError::other`], which captures the short
/// type name and a backtrace for the unhandled-error log path.
#[derive(Debug, Clone, Error)]
pub enum CommandError {
    /// The invoked name matches no registered command.
    #[error("command not found")]
    NotFound,

    /// The command exists but is currently disabled.
    #[error("command is disabled")]
    Disabled,

    /// An informational signal raised by a command body.
    #[error("{0}")]
    Info(String),

    /// A warning signal raised by a command body.
    #[error("{0}")]
    Warning(String),

    /// The caller is not the privileged bot owner.
    #[error("only the bot owner can use this command")]
    NotOwner,

    /// The command is restricted to servers and was invoked in a private
    /// message.
    #[error("this command cannot be used in private messages")]
    GuildOnly,

    /// The given subcommand does not exist on the invoked command.
    #[error("unknown subcommand \"{passed}\"")]
    UnknownSubcommand {
        /// The subcommand name the user attempted.
        passed: String,
    },

    /// A required argument was not supplied.
    #[error("{parameter} is a required argument that is missing")]
    MissingArgument {
        /// Name of the missing parameter.
        parameter: String,
    },

    /// The platform refused a delivery the command itself attempted.
    #[error("{0}")]
    Forbidden(String),

    /// Any other malformed user input.
    #[error("{0}")]
    UserInput(String),

    /// Wrapper added by the dispatcher around errors raised inside a command
    /// body. Classification unwraps exactly one layer.
    #[error("command raised an error: {original}")]
    Invoke {
        /// The error raised by the command body.
        original: Box<CommandError>,
    },

    /// An arbitrary failure with no dedicated variant.
    #[error("{message}")]
    Other {
        /// Short type name of the wrapped error.
        name: String,
        /// Rendered message of the wrapped error.
        message: String,
        /// Backtrace captured when the wrapper was built.
        trace: String,
    },
}

impl CommandError {
    /// Wraps an arbitrary error, capturing its short type name and a
    /// backtrace at the call site.
    #[must_use]
    pub fn other<E>(error: &E) -> Self
    where
        E: std::error::Error,
    {
        let full_name = std::any::type_name::<E>();
        Self::Other {
            name: full_name.rsplit("::").next().unwrap_or(full_name).to_owned(),
            message: error.to_string(),
            trace: Backtrace::force_capture().to_string(),
        }
    }

    /// Wraps an error the way the command dispatcher does.
    #[must_use]
    pub fn invoke(original: Self) -> Self {
        Self::Invoke {
            original: Box::new(original),
        }
    }

    /// Returns the error to classify: the inner error for a dispatcher
    /// wrapper, the value itself otherwise. Unwraps a single layer only.
    #[must_use]
    pub fn unwrapped(&self) -> &Self {
        match self {
            Self::Invoke { original } => original,
            unwrapped => unwrapped,
        }
    }

    /// Returns the kind name surfaced to chat on the unhandled path.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::NotFound => "CommandNotFound",
            Self::Disabled => "DisabledCommand",
            Self::Info(_) => "Info",
            Self::Warning(_) => "Warning",
            Self::NotOwner => "NotOwner",
            Self::GuildOnly => "GuildOnly",
            Self::UnknownSubcommand { .. } => "UnknownSubcommand",
            Self::MissingArgument { .. } => "MissingArgument",
            Self::Forbidden(_) => "Forbidden",
            Self::UserInput(_) => "UserInput",
            Self::Invoke { .. } => "CommandInvokeError",
            Self::Other { name, .. } => name,
        }
    }

    /// Returns the captured backtrace, when one exists.
    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        match self {
            Self::Other { trace, .. } => Some(trace),
            _ => None,
        }
    }
}
