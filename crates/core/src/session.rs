use chrono::{DateTime, Duration, Utc};
use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fmt;
use std::sync::Arc;

use crate::error::QuizError;
use crate::model::{Question, QuestionBank};
use crate::shuffle::ShuffledOrder;
use crate::stats::SessionStats;
use crate::time::Clock;

//
// ─── PHASES AND OPERATIONS ─────────────────────────────────────────────────────
//

/// Life-cycle stage of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Phase::Idle => "idle",
            Phase::InProgress => "in progress",
            Phase::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Session operations that can be refused because of the current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CurrentQuestion,
    SubmitAnswer,
    Advance,
    EndNow,
    Stats,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::CurrentQuestion => "current_question",
            Operation::SubmitAnswer => "submit_answer",
            Operation::Advance => "advance",
            Operation::EndNow => "end_now",
            Operation::Stats => "stats",
        };
        f.write_str(label)
    }
}

//
// ─── RESULTS ───────────────────────────────────────────────────────────────────
//

/// What the presenter needs after a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Index of the correct answer, for highlighting.
    pub correct_index: usize,
    /// True when the answered question is the last one in the order.
    pub is_last: bool,
}

/// Result of moving past an answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Next,
    Finished,
}

/// One locked-in answer, kept so outcomes can be re-derived after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub question_index: usize,
    pub answer_index: usize,
    pub correct: bool,
}

/// Snapshot of everything a presenter renders outside the stats screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub phase: Phase,
    pub position: usize,
    pub total: usize,
    pub score: usize,
    pub locked: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz state machine.
///
/// `Idle --start--> InProgress --(submit_answer; advance)*--> Finished`, with
/// `end_now` jumping from `InProgress` straight to `Finished` and `start`
/// restarting from any phase. Calls are expected one at a time; nothing here
/// blocks or performs I/O.
pub struct QuizSession<R = ThreadRng> {
    bank: Arc<QuestionBank>,
    rng: R,
    clock: Clock,
    phase: Phase,
    order: ShuffledOrder,
    position: usize,
    score: usize,
    locked: bool,
    history: Vec<Submission>,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl QuizSession<ThreadRng> {
    /// Create an idle session that shuffles with the thread-local RNG.
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self::with_rng(bank, rand::rng())
    }
}

impl<R: Rng> QuizSession<R> {
    /// Create an idle session with an explicit randomness source.
    #[must_use]
    pub fn with_rng(bank: Arc<QuestionBank>, rng: R) -> Self {
        Self {
            bank,
            rng,
            clock: Clock::system(),
            phase: Phase::Idle,
            order: ShuffledOrder::default(),
            position: 0,
            score: 0,
            locked: false,
            history: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Shuffle the bank and begin (or restart) the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyBank` if there are no questions; the session is
    /// left untouched in that case.
    pub fn start(&mut self) -> Result<(), QuizError> {
        if self.bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        self.order = ShuffledOrder::generate(self.bank.len(), &mut self.rng);
        self.phase = Phase::InProgress;
        self.position = 0;
        self.score = 0;
        self.locked = false;
        self.history.clear();
        self.started_at = Some(self.clock.now());
        self.finished_at = None;

        debug!("quiz started with order {:?}", self.order.as_slice());
        Ok(())
    }

    /// The question at the current position.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `InProgress` and
    /// `QuizError::OutOfRange` if the position is past the end.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        self.require_phase(Phase::InProgress, Operation::CurrentQuestion)?;
        let index = self.current_bank_index()?;
        self.bank.get(index).ok_or(QuizError::OutOfRange {
            position: self.position,
            total: self.order.len(),
        })
    }

    /// Lock in an answer for the current question.
    ///
    /// Only the lock flag, the score and the submission history change.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `InProgress`,
    /// `QuizError::AlreadyAnswered` on a second submission before `advance`, and
    /// `QuizError::InvalidAnswer` for an index past the question's answers.
    pub fn submit_answer(&mut self, answer_index: usize) -> Result<AnswerOutcome, QuizError> {
        self.require_phase(Phase::InProgress, Operation::SubmitAnswer)?;
        if self.locked {
            return Err(QuizError::AlreadyAnswered);
        }

        let question_index = self.current_bank_index()?;
        let (correct, correct_index) = {
            let question = self.current_question()?;
            let answer = question
                .answer(answer_index)
                .ok_or(QuizError::InvalidAnswer {
                    index: answer_index,
                    available: question.answers().len(),
                })?;
            (answer.is_correct(), question.correct_index())
        };

        self.locked = true;
        if correct {
            self.score += 1;
        }
        self.history.push(Submission {
            question_index,
            answer_index,
            correct,
        });

        let is_last = self.position + 1 == self.order.len();
        debug!(
            "answered question {question_index} with {answer_index} (correct: {correct}, score: {})",
            self.score
        );

        Ok(AnswerOutcome {
            correct,
            correct_index,
            is_last,
        })
    }

    /// Move past the answered question, finishing after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `InProgress` and
    /// `QuizError::NotAnswered` if the current question has no locked answer.
    pub fn advance(&mut self) -> Result<Advance, QuizError> {
        self.require_phase(Phase::InProgress, Operation::Advance)?;
        if !self.locked {
            return Err(QuizError::NotAnswered);
        }

        self.position += 1;
        self.locked = false;

        if self.position >= self.order.len() {
            self.finish();
            return Ok(Advance::Finished);
        }
        Ok(Advance::Next)
    }

    /// Stop early, skipping whatever questions remain.
    ///
    /// A question that was answered but not yet advanced past still counts as
    /// answered, so the score never exceeds the answered count.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` outside `InProgress`.
    pub fn end_now(&mut self) -> Result<(), QuizError> {
        self.require_phase(Phase::InProgress, Operation::EndNow)?;
        if self.locked {
            self.position += 1;
            self.locked = false;
        }
        self.finish();
        Ok(())
    }

    /// Final score, answered count and percentage.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidPhase` unless the session is finished and
    /// `QuizError::DivisionUndefined` if it ended before any answer.
    pub fn stats(&self) -> Result<SessionStats, QuizError> {
        self.require_phase(Phase::Finished, Operation::Stats)?;
        SessionStats::compute(self.score, self.answered_count())
    }

    /// Correctness of each answered question, in presentation order.
    ///
    /// Re-derived from the retained history on every call.
    pub fn per_question_outcomes(&self) -> impl Iterator<Item = bool> + '_ {
        self.history
            .iter()
            .take(self.answered_count())
            .map(|submission| submission.correct)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            phase: self.phase,
            position: self.position,
            total: self.order.len(),
            score: self.score,
            locked: self.locked,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Number of questions answered and moved past.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.position
    }

    /// Number of questions in the current order (0 before the first start).
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn order(&self) -> &ShuffledOrder {
        &self.order
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn history(&self) -> &[Submission] {
        &self.history
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Time between start and finish, once finished.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    fn require_phase(&self, expected: Phase, operation: Operation) -> Result<(), QuizError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(QuizError::InvalidPhase {
                operation,
                phase: self.phase,
            })
        }
    }

    fn current_bank_index(&self) -> Result<usize, QuizError> {
        self.order.get(self.position).ok_or(QuizError::OutOfRange {
            position: self.position,
            total: self.order.len(),
        })
    }

    fn finish(&mut self) {
        self.phase = Phase::Finished;
        self.finished_at = Some(self.clock.now());
        debug!(
            "quiz finished: score {} of {} answered",
            self.score, self.position
        );
    }
}

impl<R> fmt::Debug for QuizSession<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("phase", &self.phase)
            .field("order", &self.order)
            .field("position", &self.position)
            .field("score", &self.score)
            .field("locked", &self.locked)
            .field("history_len", &self.history.len())
            .field("started_at", &self.started_at)
            .field("finished_at", &self.finished_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
