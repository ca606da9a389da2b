//! `convene team archive`: put a team into read-only archived state.

use crate::error::CommandError;
use crate::executor::Command;
use crate::resolve;
use crate::session::Session;
use crate::validation::{check, is_valid_guid, Validation, Validator};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, clap::Args)]
pub struct TeamArchiveCommand {
    /// Team id
    #[arg(short, long)]
    pub id: Option<String>,

    /// Team display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Team id (deprecated, use --id)
    #[arg(long)]
    pub team_id: Option<String>,

    /// Make the team's site read-only for members while archived
    #[arg(long)]
    pub read_only_site: bool,
}

#[async_trait]
impl Command for TeamArchiveCommand {
    fn name(&self) -> &'static str {
        "team archive"
    }

    fn telemetry(&self) -> Value {
        json!({
            "id": self.id.is_some(),
            "name": self.name.is_some(),
            "teamId": self.team_id.is_some(),
            "readOnlySite": self.read_only_site,
        })
    }

    fn normalize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(team_id) = self.team_id.take() {
            self.id = Some(team_id);
            warnings.push("Option 'team-id' is deprecated. Please use 'id' instead.".to_string());
        }
        warnings
    }

    fn validators(&self) -> Vec<Validator<Self>> {
        vec![check(|cmd: &TeamArchiveCommand| {
            if cmd.id.is_none() && cmd.name.is_none() {
                return Validation::fail("Specify either id or name");
            }

            if cmd.name.is_some() && cmd.id.is_some() {
                return Validation::fail("Specify either id or name but not both");
            }

            if let Some(id) = &cmd.id {
                if !is_valid_guid(id) {
                    return Validation::fail(format!("{} is not a valid GUID", id));
                }
            }

            Validation::Valid
        })]
    }

    fn provided_options(&self) -> BTreeSet<&'static str> {
        let mut provided = BTreeSet::new();
        if self.id.is_some() {
            provided.insert("id");
        }
        if self.name.is_some() {
            provided.insert("name");
        }
        if self.read_only_site {
            provided.insert("read-only-site");
        }
        provided
    }

    async fn run(&self, session: &Session) -> Result<Option<Value>, CommandError> {
        let team_id = match &self.id {
            Some(id) => id.clone(),
            None => {
                let name = self.name.as_deref().unwrap_or_default();
                resolve::team_id_by_name(session, name).await?
            }
        };

        session
            .post(
                &format!("/teams/{}/archive", team_id),
                json!({ "setSiteReadOnlyForMembers": self.read_only_site }),
            )
            .await?;

        Ok(None)
    }
}
