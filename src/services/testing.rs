// src/services/testing.rs
//! In-process `TextGenerator` for tests and offline development.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::provider::{ProviderError, TextGenerator};

#[derive(Debug, Clone)]
enum Behaviour {
    /// Reply with the system instruction that was received.
    Echo,
    Fixed(String),
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
}

/// Records every `complete` call so tests can count provider traffic.
#[derive(Debug)]
pub struct StubGenerator {
    configured: bool,
    behaviour: Behaviour,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubGenerator {
    fn with(configured: bool, behaviour: Behaviour) -> Self {
        Self { configured, behaviour, delay: None, calls: Mutex::new(Vec::new()) }
    }

    pub fn echo() -> Self {
        Self::with(true, Behaviour::Echo)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::with(true, Behaviour::Fixed(text.into()))
    }

    pub fn failing() -> Self {
        Self::with(true, Behaviour::Fail)
    }

    /// Behaves like a provider with no credential.
    pub fn unconfigured() -> Self {
        Self::with(false, Behaviour::Echo)
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.recorded().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded().last().cloned()
    }

    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                system: system.to_string(),
                prompt: prompt.to_string(),
                max_tokens,
            });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behaviour {
            Behaviour::Echo => Ok(system.to_string()),
            Behaviour::Fixed(text) => Ok(text.clone()),
            Behaviour::Fail => Err(ProviderError::Status {
                status: 503,
                body: "upstream exploded: internal trace id 42".to_string(),
            }),
        }
    }
}
