//! `convene channel member remove`: remove a member from a private channel.
//!
//! The team, the channel, and the member can each be addressed by id or by
//! name; names resolve through dependent lookups before the delete. Channel
//! lookup takes the server's first match; member lookup refuses to guess
//! when several members share the supplied name.

use crate::error::CommandError;
use crate::executor::Command;
use crate::http::encode_query_value;
use crate::options::OptionSet;
use crate::prompt::Confirmation;
use crate::resolve::{self, collection, entity_id, pick_match, MatchPolicy};
use crate::session::Session;
use crate::validation::{check, is_valid_guid, Validation, Validator};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct ChannelMemberRemoveCommand {
    /// Team id
    #[arg(long)]
    pub team_id: Option<String>,

    /// Team display name
    #[arg(long)]
    pub team_name: Option<String>,

    /// Channel id
    #[arg(long)]
    pub channel_id: Option<String>,

    /// Channel display name
    #[arg(long)]
    pub channel_name: Option<String>,

    /// Member's user id
    #[arg(long)]
    pub user_id: Option<String>,

    /// Member's user name (email)
    #[arg(long)]
    pub user_name: Option<String>,

    /// Channel membership id
    #[arg(long)]
    pub id: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub confirm: bool,
}

impl ChannelMemberRemoveCommand {
    async fn team_id(&self, session: &Session) -> Result<String, CommandError> {
        match &self.team_id {
            Some(id) => Ok(id.clone()),
            None => {
                let name = self.team_name.as_deref().unwrap_or_default();
                resolve::team_id_by_name(session, name).await
            }
        }
    }

    async fn channel_id(&self, session: &Session, team_id: &str) -> Result<String, CommandError> {
        if let Some(id) = &self.channel_id {
            return Ok(id.clone());
        }

        let name = self.channel_name.as_deref().unwrap_or_default();
        let response = session
            .get(&format!(
                "/teams/{}/channels?displayName={}",
                team_id,
                encode_query_value(name)
            ))
            .await?;
        let channel = pick_match("channel", name, collection(&response), MatchPolicy::FirstWins)?;

        if channel.get("membershipType").and_then(|m| m.as_str()) != Some("private") {
            return Err(CommandError::Resolution(format!(
                "The specified channel '{}' is not a private channel.",
                name
            )));
        }

        entity_id("channel", &channel)
    }

    async fn member_id(
        &self,
        session: &Session,
        team_id: &str,
        channel_id: &str,
    ) -> Result<String, CommandError> {
        if let Some(id) = &self.id {
            return Ok(id.clone());
        }

        let response = session
            .get(&format!("/teams/{}/channels/{}/members", team_id, channel_id))
            .await?;

        let matches: Vec<Value> = collection(&response)
            .into_iter()
            .filter(|member| {
                let by_user_id = self.user_id.as_deref().is_some_and(|user_id| {
                    member
                        .get("userId")
                        .and_then(|v| v.as_str())
                        .is_some_and(|v| v.eq_ignore_ascii_case(user_id))
                });
                let by_user_name = self.user_name.as_deref().is_some_and(|user_name| {
                    member
                        .get("email")
                        .and_then(|v| v.as_str())
                        .is_some_and(|v| v.eq_ignore_ascii_case(user_name))
                });
                by_user_id || by_user_name
            })
            .collect();

        let identity = self
            .user_name
            .as_deref()
            .or(self.user_id.as_deref())
            .unwrap_or_default();
        let member = pick_match("member", identity, matches, MatchPolicy::RequireUnique)?;
        entity_id("member", &member)
    }
}

#[async_trait]
impl Command for ChannelMemberRemoveCommand {
    fn name(&self) -> &'static str {
        "channel member remove"
    }

    fn telemetry(&self) -> Value {
        json!({
            "teamId": self.team_id.is_some(),
            "teamName": self.team_name.is_some(),
            "channelId": self.channel_id.is_some(),
            "channelName": self.channel_name.is_some(),
            "userId": self.user_id.is_some(),
            "userName": self.user_name.is_some(),
            "id": self.id.is_some(),
            "confirm": self.confirm,
        })
    }

    fn validators(&self) -> Vec<Validator<Self>> {
        vec![check(|cmd: &ChannelMemberRemoveCommand| {
            if let Some(team_id) = &cmd.team_id {
                if !is_valid_guid(team_id) {
                    return Validation::fail(format!("{} is not a valid GUID", team_id));
                }
            }

            if let Some(channel_id) = &cmd.channel_id {
                if !is_valid_guid(channel_id) {
                    return Validation::fail(format!(
                        "{} is not a valid channel id",
                        channel_id
                    ));
                }
            }

            if let Some(user_id) = &cmd.user_id {
                if !is_valid_guid(user_id) {
                    return Validation::fail(format!("{} is not a valid GUID", user_id));
                }
            }

            Validation::Valid
        })]
    }

    fn option_sets(&self) -> Vec<OptionSet> {
        vec![
            OptionSet::required(&["team-id", "team-name"]),
            OptionSet::required(&["channel-id", "channel-name"]),
            OptionSet::required(&["user-id", "user-name", "id"]),
        ]
    }

    fn provided_options(&self) -> BTreeSet<&'static str> {
        let mut provided = BTreeSet::new();
        if self.team_id.is_some() {
            provided.insert("team-id");
        }
        if self.team_name.is_some() {
            provided.insert("team-name");
        }
        if self.channel_id.is_some() {
            provided.insert("channel-id");
        }
        if self.channel_name.is_some() {
            provided.insert("channel-name");
        }
        if self.user_id.is_some() {
            provided.insert("user-id");
        }
        if self.user_name.is_some() {
            provided.insert("user-name");
        }
        if self.id.is_some() {
            provided.insert("id");
        }
        provided
    }

    fn confirmation(&self) -> Option<Confirmation> {
        let member = self
            .user_name
            .as_deref()
            .or(self.user_id.as_deref())
            .or(self.id.as_deref())
            .unwrap_or_default();
        let channel = self
            .channel_name
            .as_deref()
            .or(self.channel_id.as_deref())
            .unwrap_or_default();
        let team = self
            .team_name
            .as_deref()
            .or(self.team_id.as_deref())
            .unwrap_or_default();

        Some(Confirmation::new(
            format!(
                "Are you sure you want to remove the member {} from the channel {} in team {}?",
                member, channel, team
            ),
            self.confirm,
        ))
    }

    async fn run(&self, session: &Session) -> Result<Option<Value>, CommandError> {
        let team_id = self.team_id(session).await?;
        let channel_id = self.channel_id(session, &team_id).await?;
        let member_id = self.member_id(session, &team_id, &channel_id).await?;

        session
            .delete(&format!(
                "/teams/{}/channels/{}/members/{}",
                team_id, channel_id, member_id
            ))
            .await?;

        Ok(None)
    }
}
