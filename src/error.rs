//! Error types for the parsing core.
//!
//! Every variant is a recoverable parse failure. The `Display` output is
//! the exact message shown to the user, so the dispatcher can fold any
//! error into [`Command::Invalid`](crate::Command::Invalid) verbatim.

use thiserror::Error;

use crate::core::DateTimeError;

/// A recognized failure while parsing one input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The first token of the line is not a known command keyword.
    #[error("unrecognized command")]
    UnrecognizedCommand,

    /// The keyword matched but the arguments fail the command's pattern
    /// (missing flag or empty description).
    #[error("invalid task\nusage: {usage}")]
    MalformedArguments {
        /// The fixed usage string for the command kind.
        usage: &'static str,
    },

    /// A date/time token matched none of the accepted formats.
    #[error(transparent)]
    DateTime(#[from] DateTimeError),

    /// A list range where `from` is after `to`.
    #[error("invalid date range: from must not be after to")]
    InvalidDateRange,

    /// A mark/unmark/delete argument that is not a positive integer.
    #[error("invalid task index: expected a positive number")]
    InvalidIndex,
}
