//! Error types for the generator CLI.

use thiserror::Error;

use crate::error::GenerationError;

/// Errors surfaced by CLI parsing and rendering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CliError {
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognized.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// `--date` was combined with a history flag.
    #[error("--date cannot be combined with {flag}")]
    ConflictingFlags {
        /// The history flag that conflicted.
        flag: &'static str,
    },
    /// Date or probability validation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Records could not be rendered as JSON.
    #[error("failed to render JSON: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
}
