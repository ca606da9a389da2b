//! `convene site remove`: purge a deleted site from the tenant recycle bin.
//!
//! The server runs this asynchronously. By default the command submits the
//! operation and returns; with `--wait` it polls at the server-supplied
//! interval until the operation completes or fails.

use crate::error::CommandError;
use crate::executor::Command;
use crate::operation::{wait_until_finished, OperationStatus};
use crate::prompt::Confirmation;
use crate::session::Session;
use crate::validation::{check, is_valid_site_url, Validation, Validator};
use async_trait::async_trait;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, clap::Args)]
pub struct SiteRemoveCommand {
    /// URL of the deleted site
    #[arg(short, long)]
    pub url: String,

    /// Block until the server-side operation completes
    #[arg(long)]
    pub wait: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub confirm: bool,
}

#[async_trait]
impl Command for SiteRemoveCommand {
    fn name(&self) -> &'static str {
        "site remove"
    }

    fn telemetry(&self) -> Value {
        json!({
            "wait": self.wait,
            "confirm": self.confirm,
        })
    }

    fn validators(&self) -> Vec<Validator<Self>> {
        vec![check(|cmd: &SiteRemoveCommand| {
            if !is_valid_site_url(&cmd.url) {
                return Validation::fail(format!("{} is not a valid site URL", cmd.url));
            }
            Validation::Valid
        })]
    }

    fn confirmation(&self) -> Option<Confirmation> {
        Some(Confirmation::new(
            format!(
                "Are you sure you want to permanently remove the deleted site {} from the recycle bin?",
                self.url
            ),
            self.confirm,
        ))
    }

    async fn run(&self, session: &Session) -> Result<Option<Value>, CommandError> {
        let response = session
            .post("/admin/recyclebin/remove", json!({ "url": self.url }))
            .await?;
        let status = OperationStatus::from_value(response)?;

        if let Some(message) = &status.error {
            return Err(CommandError::Operation(message.clone()));
        }

        if self.wait {
            wait_until_finished(session, status).await?;
        }

        Ok(None)
    }
}
