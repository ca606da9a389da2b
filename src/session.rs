//! Per-invocation session context.
//!
//! One `Session` is created at invocation start and owned by that invocation
//! for its lifetime; there is no shared mutable state across invocations.
//! It carries the resolved API base URL and the transport, and is passed
//! explicitly into the executor and every command.

use crate::config::ConveneConfig;
use crate::error::CommandError;
use crate::http::{HttpTransport, Transport};
use crate::operation::{OperationHandle, OperationStatus};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub struct Session {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Session {
    /// Session over the real HTTP transport, from loaded configuration.
    pub fn connect(config: &ConveneConfig) -> Result<Self, CommandError> {
        let token = config.connection.token()?;
        let transport = Arc::new(HttpTransport::new(token)?);
        Ok(Self::with_transport(
            config.connection.base_url.clone(),
            transport,
        ))
    }

    /// Session over an arbitrary transport. Tests use this to substitute
    /// a recording mock.
    pub fn with_transport(base_url: String, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    /// Session with a transport that fails every call. Used by validator
    /// unit tests that never reach the network.
    pub fn unconnected() -> Self {
        Self::with_transport("https://unconnected.invalid".to_string(), Arc::new(NullTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<Value, CommandError> {
        self.transport.get(&self.url(path)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, CommandError> {
        self.transport.post(&self.url(path), body).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, CommandError> {
        self.transport.patch(&self.url(path), body).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, CommandError> {
        self.transport.delete(&self.url(path)).await
    }

    /// Status check for a server-side operation. The handle is threaded
    /// through exactly as the server returned it.
    pub async fn operation_status(
        &self,
        handle: &OperationHandle,
    ) -> Result<OperationStatus, CommandError> {
        let value = self
            .get(&format!("/admin/operations/{}", handle.as_str()))
            .await?;
        OperationStatus::from_value(value)
    }
}

struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    async fn get(&self, _url: &str) -> Result<Value, CommandError> {
        Err(CommandError::Transport("Not connected".to_string()))
    }

    async fn post(&self, _url: &str, _body: Value) -> Result<Value, CommandError> {
        Err(CommandError::Transport("Not connected".to_string()))
    }

    async fn patch(&self, _url: &str, _body: Value) -> Result<Value, CommandError> {
        Err(CommandError::Transport("Not connected".to_string()))
    }

    async fn delete(&self, _url: &str) -> Result<Value, CommandError> {
        Err(CommandError::Transport("Not connected".to_string()))
    }
}
