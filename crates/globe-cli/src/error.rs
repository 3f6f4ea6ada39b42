//! Error types for the command-line front end.

use std::fmt;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Debug)]
pub enum CliError {
    /// Ellipsoid construction or a transform failed.
    Globe(globe::Error),
    /// Serializing the result failed.
    Output {
        /// The output format being written.
        format: &'static str,
        /// The error message.
        message: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Globe(e) => write!(f, "{e}"),
            CliError::Output { format, message } => {
                write!(f, "failed to write {format} output: {message}")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Globe(e) => Some(e),
            CliError::Output { .. } => None,
        }
    }
}

impl From<globe::Error> for CliError {
    fn from(e: globe::Error) -> Self {
        CliError::Globe(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            format: "json",
            message: e.to_string(),
        }
    }
}
