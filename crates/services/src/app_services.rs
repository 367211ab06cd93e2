use std::sync::Arc;

use log::info;

use crate::Clock;
use crate::config::QuizConfig;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;

/// Assembles app-facing services from the resolved configuration.
#[derive(Debug, Clone)]
pub struct AppServices {
    config: QuizConfig,
    quiz: Arc<QuizService>,
}

impl AppServices {
    /// Load the configured bank and build the quiz service.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the question bank cannot be loaded.
    pub fn from_config(config: QuizConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let quiz = QuizService::load(config.bank_source())?.with_clock(clock);
        if quiz.question_count() == 0 {
            info!("{} contains no questions", config.bank_source());
        }

        Ok(Self {
            config,
            quiz: Arc::new(quiz),
        })
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}
