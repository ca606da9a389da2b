//! Shared fixtures: a recording mock transport and a scripted prompt.

use async_trait::async_trait;
use convene::error::CommandError;
use convene::http::Transport;
use convene::prompt::ConfirmationPrompt;
use convene::session::Session;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One request as a command issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Transport that records every request and replays queued responses in
/// order. An unexpected request (empty queue) fails the call.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Value, String>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    pub fn push_operation_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        url: &str,
        body: Option<Value>,
    ) -> Result<Value, CommandError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            body,
        });
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(CommandError::Operation(message)),
            None => Err(CommandError::Transport(format!(
                "Unexpected request: {} {}",
                method, url
            ))),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Value, CommandError> {
        self.record("GET", url, None)
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value, CommandError> {
        self.record("POST", url, Some(body))
    }

    async fn patch(&self, url: &str, body: Value) -> Result<Value, CommandError> {
        self.record("PATCH", url, Some(body))
    }

    async fn delete(&self, url: &str) -> Result<Value, CommandError> {
        self.record("DELETE", url, None)
    }
}

/// Prompt that always answers the same way and records what it was asked.
pub struct ScriptedPrompt {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Arc<Self> {
        Arc::new(Self {
            answer,
            asked: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts_shown(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationPrompt for ScriptedPrompt {
    async fn confirm(&self, message: &str) -> Result<bool, CommandError> {
        self.asked.lock().unwrap().push(message.to_string());
        Ok(self.answer)
    }
}

pub const BASE_URL: &str = "https://api.test.example/v1.0";

pub fn session_over(transport: Arc<MockTransport>) -> Session {
    Session::with_transport(BASE_URL.to_string(), transport)
}
