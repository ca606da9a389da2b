//! CLI route: single route table and run context. Dispatches parsed
//! commands through the executor.

use crate::cli::parse::{
    ChannelCommands, ChannelMemberCommands, Commands, SiteCommands, TeamCommands,
    TeamMessagingCommands,
};
use crate::cli::output::{format_output, validate_output_format};
use crate::config::ConveneConfig;
use crate::error::CommandError;
use crate::executor::{run_command, Command, CommandOutcome};
use crate::prompt::{ConfirmationPrompt, TerminalPrompt};
use crate::session::Session;
use std::sync::Arc;

/// Runtime context for one CLI invocation: session, prompt, output format.
pub struct RunContext {
    session: Session,
    prompt: Arc<dyn ConfirmationPrompt>,
    output: String,
}

impl RunContext {
    /// Context over the real transport and terminal prompt.
    pub fn new(config: &ConveneConfig, output: String) -> Result<Self, CommandError> {
        let session = Session::connect(config)?;
        Ok(Self::with_parts(session, Arc::new(TerminalPrompt), output))
    }

    /// Context from explicit parts. Tests substitute a mock transport and
    /// a scripted prompt here.
    pub fn with_parts(
        session: Session,
        prompt: Arc<dyn ConfirmationPrompt>,
        output: String,
    ) -> Self {
        Self {
            session,
            prompt,
            output,
        }
    }

    /// Execute a parsed command via the single route table.
    ///
    /// Returns the text to print on stdout, if any. A declined
    /// confirmation returns `None`: success, nothing printed.
    pub async fn execute(&self, command: Commands) -> Result<Option<String>, CommandError> {
        // Usage errors must surface before any network call, including for
        // commands that print no payload.
        validate_output_format(&self.output)?;

        match command {
            Commands::Team {
                command: TeamCommands::Archive(mut cmd),
            } => self.dispatch(&mut cmd).await,
            Commands::Team {
                command:
                    TeamCommands::Messaging {
                        command: TeamMessagingCommands::Set(mut cmd),
                    },
            } => self.dispatch(&mut cmd).await,
            Commands::Channel {
                command:
                    ChannelCommands::Member {
                        command: ChannelMemberCommands::Remove(mut cmd),
                    },
            } => self.dispatch(&mut cmd).await,
            Commands::Site {
                command: SiteCommands::Remove(mut cmd),
            } => self.dispatch(&mut cmd).await,
        }
    }

    async fn dispatch<C: Command>(&self, command: &mut C) -> Result<Option<String>, CommandError> {
        match run_command(command, &self.session, self.prompt.as_ref()).await? {
            CommandOutcome::Declined => Ok(None),
            CommandOutcome::Completed(None) => Ok(None),
            CommandOutcome::Completed(Some(value)) => {
                Ok(Some(format_output(&value, &self.output)?))
            }
        }
    }
}
