// src/services/reply.rs
use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use super::provider::{ProviderError, TextGenerator};
use super::timestamp;
use super::tone::Tone;
use crate::message::{ReplyRequest, ReplyResponse};

pub const MESSAGE_REQUIRED: &str = "Message is required";

pub const NOT_CONFIGURED_REPLY: &str = "AI is not configured in this preview. Please add your OPENAI_API_KEY in the environment to enable live responses.";

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("generation failed: {0}")]
    Generation(#[from] ProviderError),
}

/// Maps a message and a tone to a generated reply.
#[derive(Clone)]
pub struct ReplyService {
    generator: Arc<dyn TextGenerator>,
    max_tokens: u32,
}

impl ReplyService {
    pub fn new(generator: Arc<dyn TextGenerator>, max_tokens: u32) -> Self {
        Self { generator, max_tokens }
    }

    pub async fn generate_reply(&self, request: ReplyRequest) -> Result<ReplyResponse, ReplyError> {
        let message = request
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or(ReplyError::Validation(MESSAGE_REQUIRED))?;

        let tone = Tone::resolve(request.tone.as_ref());

        if !self.generator.is_configured() {
            warn!(%tone, "OPENAI_API_KEY missing, returning stubbed reply");
            return Ok(ReplyResponse {
                reply: NOT_CONFIGURED_REPLY.to_string(),
                timestamp: timestamp(),
            });
        }

        let reply = self
            .generator
            .complete(tone.system_prompt(), message, self.max_tokens)
            .await
            .map_err(|err| {
                error!(%tone, error = %err, "reply generation failed");
                ReplyError::Generation(err)
            })?;

        info!(%tone, bytes = reply.len(), "reply generated");

        Ok(ReplyResponse { reply, timestamp: timestamp() })
    }
}
