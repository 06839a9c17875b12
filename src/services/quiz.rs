// src/services/quiz.rs
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{error, info, warn};

use super::provider::{ProviderError, TextGenerator};

pub const QUIZ_SYSTEM_PROMPT: &str = "You are a professional therapist providing personalized insights based on quiz responses. Provide helpful, encouraging feedback while maintaining professional boundaries. Always recommend seeking professional help when appropriate.";

pub const NOT_CONFIGURED_RESULT: &str = "Personalized results are not configured in this preview. Please add your OPENAI_API_KEY in the environment to enable live insights.";

/// Turns a set of quiz answers into a short personalised write-up.
#[derive(Clone)]
pub struct QuizService {
    generator: Arc<dyn TextGenerator>,
    max_tokens: u32,
}

impl QuizService {
    pub fn new(generator: Arc<dyn TextGenerator>, max_tokens: u32) -> Self {
        Self { generator, max_tokens }
    }

    pub async fn personalize(&self, answers: &Map<String, Value>) -> Result<String, ProviderError> {
        if !self.generator.is_configured() {
            warn!("OPENAI_API_KEY missing, returning stubbed quiz result");
            return Ok(NOT_CONFIGURED_RESULT.to_string());
        }

        let prompt = build_prompt(answers);
        let result = self
            .generator
            .complete(QUIZ_SYSTEM_PROMPT, &prompt, self.max_tokens)
            .await
            .inspect_err(|err| error!(error = %err, "quiz personalisation failed"))?;

        info!(answers = answers.len(), "quiz result generated");
        Ok(result)
    }
}

pub fn build_prompt(answers: &Map<String, Value>) -> String {
    format!(
        "Based on these quiz responses, provide a personalized, supportive result (2-3 paragraphs):\n\n{}",
        format_answers(answers)
    )
}

/// One `question: answer` line per entry, in submission order.
pub fn format_answers(answers: &Map<String, Value>) -> String {
    answers
        .iter()
        .map(|(question, answer)| match answer {
            Value::String(text) => format!("{}: {}", question, text),
            other => format!("{}: {}", question, other),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
