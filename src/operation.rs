//! Long-running server-side operations.
//!
//! Mutating admin calls may return before the work finishes. The server
//! responds with an opaque handle, a completion flag, and the interval at
//! which it wants to be polled next. `wait_until_finished` drives the
//! status checks: it sleeps for exactly the server-supplied interval (never
//! a client-side constant), re-issues the check with the handle from the
//! prior response, and stops on completion or on a server-reported error,
//! which propagates verbatim. The operation is server-resident; killing the
//! process mid-poll leaves nothing to clean up on the client.

use crate::error::CommandError;
use crate::session::Session;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Opaque correlation token identifying an in-progress operation.
/// Never parsed or reconstructed client-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct OperationHandle(String);

impl OperationHandle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One status snapshot of a server-side operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationStatus {
    #[serde(rename = "id")]
    pub handle: OperationHandle,
    pub is_complete: bool,
    pub polling_interval_ms: u64,
    #[serde(default)]
    pub error: Option<String>,
}

impl OperationStatus {
    pub fn from_value(value: Value) -> Result<Self, CommandError> {
        serde_json::from_value(value)
            .map_err(|e| CommandError::Transport(format!("Malformed operation status: {}", e)))
    }
}

/// Poll until the operation completes or the server reports an error.
///
/// Returns immediately when the initiating response already reports
/// completion. Every wait between checks uses the interval from the most
/// recent response.
pub async fn wait_until_finished(
    session: &Session,
    initial: OperationStatus,
) -> Result<(), CommandError> {
    let mut status = initial;

    loop {
        if let Some(message) = status.error {
            return Err(CommandError::Operation(message));
        }
        if status.is_complete {
            return Ok(());
        }

        debug!(
            handle = status.handle.as_str(),
            interval_ms = status.polling_interval_ms,
            "operation incomplete, scheduling next status check"
        );
        tokio::time::sleep(Duration::from_millis(status.polling_interval_ms)).await;
        status = session.operation_status(&status.handle).await?;
    }
}
