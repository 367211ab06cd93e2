use std::sync::Arc;

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

use quiz_core::{QuestionBank, QuizSession};

use crate::Clock;
use crate::bank_loader::load_bank;
use crate::config::BankSource;
use crate::error::BankError;

/// Holds the loaded bank and hands out sessions over it.
#[derive(Debug, Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    clock: Clock,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
            clock: Clock::system(),
        }
    }

    /// Load the bank from `source` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if loading or validation fails.
    pub fn load(source: &BankSource) -> Result<Self, BankError> {
        Ok(Self::new(load_bank(source)?))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    /// An idle session shuffling with the thread-local RNG.
    #[must_use]
    pub fn new_session(&self) -> QuizSession<ThreadRng> {
        debug!("new session over {} questions", self.question_count());
        QuizSession::new(self.bank()).with_clock(self.clock)
    }

    /// An idle session with a caller-supplied RNG.
    #[must_use]
    pub fn new_session_with_rng<R: Rng>(&self, rng: R) -> QuizSession<R> {
        QuizSession::with_rng(self.bank(), rng).with_clock(self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::{Phase, QuizError};
    use quiz_core::time::{fixed_clock, fixed_now};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sessions_share_the_bank_and_clock() {
        let service = QuizService::load(&BankSource::Embedded)
            .unwrap()
            .with_clock(fixed_clock());
        let mut session = service.new_session_with_rng(StdRng::seed_from_u64(3));
        session.start().unwrap();

        assert_eq!(session.total(), 5);
        assert_eq!(session.started_at(), Some(fixed_now()));
        assert_eq!(Arc::strong_count(&service.bank), 2);
    }

    #[test]
    fn session_over_empty_bank_cannot_start() {
        let service = QuizService::new(QuestionBank::default());
        assert_eq!(service.new_session().start(), Err(QuizError::EmptyBank));
    }

    #[test]
    fn embedded_session_starts() {
        let service = QuizService::load(&BankSource::Embedded).unwrap();
        let mut session = service.new_session();
        session.start().unwrap();
        assert_eq!(session.phase(), Phase::InProgress);
    }
}
