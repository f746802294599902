//! Scripted chat backend for deterministic testing.
//!
//! Replies are served from a queue; once the queue is empty the default
//! reply is repeated. Every call is recorded for assertions.
//!
//! ## Usage
//!
//! ```rust
//! use zyniq_inference::mock::MockChatBackend;
//!
//! let backend = MockChatBackend::replying(r#"{"refinement_text":"Start small."}"#)
//!     .then_fail("provider down");
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use zyniq_core::{ChatBackend, Error, Result};

/// One scripted outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockReply {
    /// Reply with this raw text.
    Text(String),
    /// Fail with `Error::ProviderUnavailable(message)`.
    Failure(String),
}

/// A recorded `send` call.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub session_id: String,
    pub system_prompt: String,
    pub user_text: String,
}

/// Mock chat backend for testing.
#[derive(Clone)]
pub struct MockChatBackend {
    model: String,
    default_reply: MockReply,
    queue: Arc<Mutex<VecDeque<MockReply>>>,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl Default for MockChatBackend {
    fn default() -> Self {
        Self::replying("Mock response")
    }
}

impl MockChatBackend {
    /// Always reply with `text` unless something is queued.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(text.into()))
    }

    /// Always fail unless something is queued.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Failure(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            model: "mock-chat".to_string(),
            default_reply,
            queue: Arc::new(Mutex::new(VecDeque::new())),
            call_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply ahead of the default.
    pub fn then_reply(self, text: impl Into<String>) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Text(text.into()));
        self
    }

    /// Queue a failure ahead of the default.
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Failure(message.into()));
        self
    }

    /// Get all logged calls for assertion.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }

    fn next_reply(&self) -> MockReply {
        self.queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone())
    }
}

#[async_trait]
impl ChatBackend for MockChatBackend {
    async fn send(
        &self,
        session_id: &str,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String> {
        self.call_log.lock().unwrap().push(MockCall {
            session_id: session_id.to_string(),
            system_prompt: system_prompt.to_string(),
            user_text: user_text.to_string(),
        });

        match self.next_reply() {
            MockReply::Text(text) => Ok(text),
            MockReply::Failure(message) => Err(Error::ProviderUnavailable(message)),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
