//! Confirmation gate for destructive commands.
//!
//! The terminal implementation wraps `dialoguer::Confirm` with a default of
//! "no". The trait seam exists so the executor can be exercised in tests
//! without a TTY.

use crate::error::CommandError;
use async_trait::async_trait;

/// What a destructive command wants confirmed before it runs.
///
/// The message carries the identifying details of the target (names or ids
/// as supplied), so the user can verify it before answering. `skip` comes
/// from the command's `--confirm` flag and bypasses the prompt entirely.
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub message: String,
    pub skip: bool,
}

impl Confirmation {
    pub fn new(message: impl Into<String>, skip: bool) -> Self {
        Self {
            message: message.into(),
            skip,
        }
    }
}

/// Yes/no prompt presented before a destructive operation.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> Result<bool, CommandError>;
}

/// Interactive prompt on the controlling terminal, defaulting to "no".
pub struct TerminalPrompt;

#[async_trait]
impl ConfirmationPrompt for TerminalPrompt {
    async fn confirm(&self, message: &str) -> Result<bool, CommandError> {
        use dialoguer::Confirm;

        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()
            .map_err(|e| CommandError::Prompt(e.to_string()))
    }
}
