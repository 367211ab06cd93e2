use std::sync::Arc;

use services::QuizService;

/// What the UI needs from the composition root.
pub trait UiApp: Send + Sync {
    fn quiz_service(&self) -> Arc<QuizService>;
    fn auto_finish(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    auto_finish: bool,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz_service(),
            auto_finish: app.auto_finish(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    /// Whether answering the last question finishes the quiz right away.
    #[must_use]
    pub fn auto_finish(&self) -> bool {
        self.auto_finish
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
