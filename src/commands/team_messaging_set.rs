//! `convene team messaging set`: update a team's messaging settings.
//!
//! Settings are supplied as string booleans so the command can tell
//! "not provided" apart from "set to false", matching the PATCH semantics
//! of the settings endpoint.

use crate::error::CommandError;
use crate::executor::Command;
use crate::session::Session;
use crate::validation::{check, is_valid_guid, Validation, Validator};
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct TeamMessagingSetCommand {
    /// Team id
    #[arg(short = 'i', long)]
    pub team_id: String,

    /// Allow users to edit their own messages (true/false)
    #[arg(long)]
    pub allow_user_edit_messages: Option<String>,

    /// Allow users to delete their own messages (true/false)
    #[arg(long)]
    pub allow_user_delete_messages: Option<String>,

    /// Allow owners to delete any message (true/false)
    #[arg(long)]
    pub allow_owner_delete_messages: Option<String>,

    /// Allow @team mentions (true/false)
    #[arg(long)]
    pub allow_team_mentions: Option<String>,

    /// Allow @channel mentions (true/false)
    #[arg(long)]
    pub allow_channel_mentions: Option<String>,
}

const SETTINGS: [&str; 5] = [
    "allowUserEditMessages",
    "allowUserDeleteMessages",
    "allowOwnerDeleteMessages",
    "allowTeamMentions",
    "allowChannelMentions",
];

impl TeamMessagingSetCommand {
    fn setting_values(&self) -> [&Option<String>; 5] {
        [
            &self.allow_user_edit_messages,
            &self.allow_user_delete_messages,
            &self.allow_owner_delete_messages,
            &self.allow_team_mentions,
            &self.allow_channel_mentions,
        ]
    }
}

fn is_valid_boolean(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

#[async_trait]
impl Command for TeamMessagingSetCommand {
    fn name(&self) -> &'static str {
        "team messaging set"
    }

    fn telemetry(&self) -> Value {
        let mut properties = Map::new();
        for (name, value) in SETTINGS.iter().zip(self.setting_values()) {
            properties.insert(name.to_string(), Value::Bool(value.is_some()));
        }
        Value::Object(properties)
    }

    fn validators(&self) -> Vec<Validator<Self>> {
        vec![
            check(|cmd: &TeamMessagingSetCommand| {
                if !is_valid_guid(&cmd.team_id) {
                    return Validation::fail(format!("{} is not a valid GUID", cmd.team_id));
                }
                Validation::Valid
            }),
            check(|cmd: &TeamMessagingSetCommand| {
                for (name, value) in SETTINGS.iter().zip(cmd.setting_values()) {
                    if let Some(value) = value {
                        if !is_valid_boolean(value) {
                            return Validation::fail(format!(
                                "Value {} for option {} is not a valid boolean",
                                value, name
                            ));
                        }
                    }
                }
                Validation::Valid
            }),
            check(|cmd: &TeamMessagingSetCommand| {
                if cmd.setting_values().iter().all(|value| value.is_none()) {
                    return Validation::fail("Specify at least one setting to update");
                }
                Validation::Valid
            }),
        ]
    }

    fn provided_options(&self) -> BTreeSet<&'static str> {
        let mut provided = BTreeSet::new();
        provided.insert("team-id");
        let names = [
            "allow-user-edit-messages",
            "allow-user-delete-messages",
            "allow-owner-delete-messages",
            "allow-team-mentions",
            "allow-channel-mentions",
        ];
        for (name, value) in names.iter().zip(self.setting_values()) {
            if value.is_some() {
                provided.insert(name);
            }
        }
        provided
    }

    async fn run(&self, session: &Session) -> Result<Option<Value>, CommandError> {
        let mut settings = Map::new();
        for (name, value) in SETTINGS.iter().zip(self.setting_values()) {
            if let Some(value) = value {
                settings.insert(
                    name.to_string(),
                    Value::Bool(value.eq_ignore_ascii_case("true")),
                );
            }
        }

        session
            .patch(
                &format!("/teams/{}", self.team_id),
                json!({ "messagingSettings": settings }),
            )
            .await?;

        Ok(None)
    }
}
