//! HTTP transport boundary.
//!
//! Commands never touch `reqwest` directly; they issue verbs against the
//! `Transport` trait through the session. The reqwest-backed implementation
//! attaches the bearer token and maps failures onto the error taxonomy:
//! server error payloads pass through verbatim as operation errors, anything
//! below that (connect, timeout, malformed body) is a transport error.

use crate::error::CommandError;
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Verb-level interface commands program against.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, CommandError>;
    async fn post(&self, url: &str, body: Value) -> Result<Value, CommandError>;
    async fn patch(&self, url: &str, body: Value) -> Result<Value, CommandError>;
    async fn delete(&self, url: &str) -> Result<Value, CommandError>;
}

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Transport backed by a shared reqwest client.
pub struct HttpTransport {
    client: Client,
    token: String,
}

impl HttpTransport {
    pub fn new(token: String) -> Result<Self, CommandError> {
        let client = Client::builder()
            .connect_timeout(HTTP_CONNECT_TIMEOUT)
            .timeout(HTTP_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                CommandError::Transport(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, token })
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, CommandError> {
        let mut request = self
            .client
            .request(method, url)
            .bearer_auth(&self.token)
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(map_request_error)?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CommandError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(CommandError::Operation(extract_error_message(status, &text)));
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| CommandError::Transport(format!("Malformed response body: {}", e)))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, CommandError> {
        self.send(Method::GET, url, None).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, CommandError> {
        self.send(Method::POST, url, Some(body)).await
    }

    async fn patch(&self, url: &str, body: Value) -> Result<Value, CommandError> {
        self.send(Method::PATCH, url, Some(body)).await
    }

    async fn delete(&self, url: &str) -> Result<Value, CommandError> {
        self.send(Method::DELETE, url, None).await
    }
}

/// Everything outside the URL-unreserved set is escaped in query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a query string value.
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn map_request_error(error: reqwest::Error) -> CommandError {
    if error.is_timeout() {
        CommandError::Transport(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        CommandError::Transport(format!("Connection error: {}", error))
    } else {
        CommandError::Transport(format!("HTTP error: {}", error))
    }
}

/// Pull the server's own message out of an error payload when present.
/// The wire shape is `{"error": {"message": "..."}}`; anything else falls
/// back to the raw body or the status line.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }
    if body.is_empty() {
        format!("Request failed with status {}", status)
    } else {
        body.to_string()
    }
}
