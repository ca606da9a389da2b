//! Admin commands: thin wrappers over the platform's REST APIs.
//!
//! Each command owns a typed options record parsed by clap and declares its
//! validators, option sets, and confirmation through the `Command` trait;
//! the executor drives everything else.

pub mod channel_member_remove;
pub mod site_remove;
pub mod team_archive;
pub mod team_messaging_set;

pub use channel_member_remove::ChannelMemberRemoveCommand;
pub use site_remove::SiteRemoveCommand;
pub use team_archive::TeamArchiveCommand;
pub use team_messaging_set::TeamMessagingSetCommand;
