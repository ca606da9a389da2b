//! CLI domain: parse, route, and presentation only.
//! No command logic; a single route table dispatches through the executor.

mod output;
mod parse;
mod route;

pub use output::{format_output, map_error, validate_output_format};
pub use parse::{
    ChannelCommands, ChannelMemberCommands, Cli, Commands, SiteCommands, TeamCommands,
    TeamMessagingCommands,
};
pub use route::RunContext;
