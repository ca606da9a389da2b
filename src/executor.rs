//! Command executor: the shared contract every command runs through.
//!
//! Orchestration is strictly sequential: normalize deprecated options, run
//! the validator chain, resolve option sets, gate destructive actions on
//! confirmation, then hand control to the command's own `run`, which
//! performs its dependent lookups and primary calls. The first failure at
//! any step is the invocation's terminal error; nothing is retried.

use crate::error::CommandError;
use crate::options::{resolve_option_sets, OptionSet};
use crate::prompt::{Confirmation, ConfirmationPrompt};
use crate::session::Session;
use crate::validation::{run_validators, Validator};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// How an invocation ended short of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command ran; payload is the response to print, if any.
    Completed(Option<Value>),
    /// The user answered "no" at the confirmation gate. Success, no side
    /// effects, no output.
    Declined,
}

/// A single CLI command: typed options plus the declarations the executor
/// needs to validate and gate them.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// Which options were supplied, keyed by the telemetry hook and the
    /// option-set resolver. Values are never reported.
    fn telemetry(&self) -> Value {
        Value::Null
    }

    /// Copy deprecated option names onto their canonical counterparts.
    /// Returns one user-visible warning per aliased option.
    fn normalize(&mut self) -> Vec<String> {
        Vec::new()
    }

    fn validators(&self) -> Vec<Validator<Self>>
    where
        Self: Sized,
    {
        Vec::new()
    }

    fn option_sets(&self) -> Vec<OptionSet> {
        Vec::new()
    }

    /// Names of the options the caller actually supplied.
    fn provided_options(&self) -> BTreeSet<&'static str> {
        BTreeSet::new()
    }

    /// Present for destructive commands only.
    fn confirmation(&self) -> Option<Confirmation> {
        None
    }

    /// The operation itself: dependent lookups, primary call(s), optional
    /// polling. Only reached once validation and confirmation have passed.
    async fn run(&self, session: &Session) -> Result<Option<Value>, CommandError>;
}

/// Execute one command invocation end to end.
pub async fn run_command<C: Command>(
    command: &mut C,
    session: &Session,
    prompt: &dyn ConfirmationPrompt,
) -> Result<CommandOutcome, CommandError> {
    debug!(command = command.name(), properties = %command.telemetry(), "executing command");

    for warning in command.normalize() {
        warn!(command = command.name(), "{}", warning);
        eprintln!("{}", warning);
    }

    run_validators(&*command, session, &command.validators())
        .await
        .map_err(CommandError::Usage)?;

    resolve_option_sets(&command.option_sets(), &command.provided_options())
        .map_err(CommandError::Usage)?;

    if let Some(confirmation) = command.confirmation() {
        if !confirmation.skip && !prompt.confirm(&confirmation.message).await? {
            debug!(command = command.name(), "confirmation declined");
            return Ok(CommandOutcome::Declined);
        }
    }

    let output = command.run(session).await?;
    Ok(CommandOutcome::Completed(output))
}
