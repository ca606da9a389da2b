//! CLI parse: clap types for Convene. No behavior; definitions only.

use crate::commands::{
    ChannelMemberRemoveCommand, SiteRemoveCommand, TeamArchiveCommand, TeamMessagingSetCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convene CLI - administration for the Convene collaboration platform
#[derive(Parser)]
#[command(name = "convene")]
#[command(about = "Manage a Convene tenant from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(long, default_value = "json")]
    pub output: String,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage teams
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// Manage channels
    Channel {
        #[command(subcommand)]
        command: ChannelCommands,
    },
    /// Manage sites
    Site {
        #[command(subcommand)]
        command: SiteCommands,
    },
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Archive a team, making it read-only
    Archive(TeamArchiveCommand),
    /// Messaging settings
    Messaging {
        #[command(subcommand)]
        command: TeamMessagingCommands,
    },
}

#[derive(Subcommand)]
pub enum TeamMessagingCommands {
    /// Update a team's messaging settings
    Set(TeamMessagingSetCommand),
}

#[derive(Subcommand)]
pub enum ChannelCommands {
    /// Channel membership
    Member {
        #[command(subcommand)]
        command: ChannelMemberCommands,
    },
}

#[derive(Subcommand)]
pub enum ChannelMemberCommands {
    /// Remove a member from a private channel
    Remove(ChannelMemberRemoveCommand),
}

#[derive(Subcommand)]
pub enum SiteCommands {
    /// Permanently remove a deleted site from the recycle bin
    Remove(SiteRemoveCommand),
}
