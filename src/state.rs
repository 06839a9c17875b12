// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::client_directory::ClientDirectory;
use crate::services::provider::{OpenAiClient, ProviderError, TextGenerator};
use crate::services::quiz::QuizService;
use crate::services::reply::ReplyService;

pub type SharedState = Arc<AppState>;

/// Everything handlers read. Nothing in here is mutated after startup.
pub struct AppState {
    pub replies: ReplyService,
    pub quizzes: QuizService,
    pub clients: ClientDirectory,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let generator = Arc::new(OpenAiClient::new(&config.provider)?);
        Ok(Self::with_generator(config, generator))
    }

    pub fn with_generator(config: &AppConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            replies: ReplyService::new(generator.clone(), config.reply_max_tokens),
            quizzes: QuizService::new(generator, config.quiz_max_tokens),
            clients: ClientDirectory::seeded(),
        }
    }
}
