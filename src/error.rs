//! Error types for the Convene CLI.

use thiserror::Error;

/// Terminal failure of a single command invocation.
///
/// Every layer either passes a result upward or a single descriptive message
/// downward; nothing is retried and nothing is swallowed. A declined
/// confirmation prompt is not an error and is not represented here.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Option-set violation or validator failure. Reported before any
    /// network call is made.
    #[error("{0}")]
    Usage(String),

    /// A dependent lookup found zero matches, or more than one where the
    /// command requires a unique match.
    #[error("{0}")]
    Resolution(String),

    /// The server rejected a call or returned an explicit error payload.
    /// The message is passed through verbatim.
    #[error("{0}")]
    Operation(String),

    /// Transport-level failure (connection, timeout, malformed response).
    #[error("{0}")]
    Transport(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The confirmation prompt itself failed (no TTY, read error).
    #[error("Failed to read confirmation: {0}")]
    Prompt(String),
}

impl From<config::ConfigError> for CommandError {
    fn from(err: config::ConfigError) -> Self {
        CommandError::Config(err.to_string())
    }
}
