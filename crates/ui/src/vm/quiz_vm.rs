use log::warn;
use rand::Rng;
use rand::rngs::ThreadRng;

use quiz_core::{Advance, AnswerOutcome, Phase, QuizError, QuizSession, SessionProgress};

use crate::vm::stats_vm::{StatsVm, map_stats};

/// A single user action forwarded from the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    Answer(usize),
    Next,
    End,
    /// Enter key: start/restart when idle or finished, next when answered.
    Enter,
    ToggleInstructions,
    CloseInstructions,
}

/// Correctness coloring applied to answer buttons, the page and bar blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Neutral,
    Correct,
    Wrong,
}

impl Status {
    #[must_use]
    pub fn from_correct(correct: bool) -> Self {
        if correct { Self::Correct } else { Self::Wrong }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Status::Neutral => "",
            Status::Correct => "correct",
            Status::Wrong => "wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerButtonVm {
    pub index: usize,
    pub text: String,
    pub status: Status,
    pub selected: bool,
    pub disabled: bool,
}

/// Everything the quiz screen renders, detached from the session borrow.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizScreenVm {
    pub phase: Phase,
    pub prompt: Option<String>,
    pub counter_label: String,
    pub score_label: String,
    pub answers: Vec<AnswerButtonVm>,
    pub page_status: Status,
    pub can_advance: bool,
    pub start_label: &'static str,
    pub stats: Option<StatsVm>,
    pub error: Option<String>,
    pub instructions_open: bool,
}

/// Changes whenever an intent replaces or disables the control that had
/// keyboard focus, so the view knows to focus the quiz root again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusKey {
    progress: SessionProgress,
    instructions_open: bool,
}

/// Presenter state: one session plus the bits of UI state the core does not own.
pub struct QuizVm<R = ThreadRng> {
    session: QuizSession<R>,
    auto_finish: bool,
    last_answer: Option<(usize, AnswerOutcome)>,
    instructions_open: bool,
    error: Option<QuizError>,
}

impl<R: Rng> QuizVm<R> {
    #[must_use]
    pub fn new(session: QuizSession<R>, auto_finish: bool) -> Self {
        Self {
            session,
            auto_finish,
            last_answer: None,
            instructions_open: false,
            error: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession<R> {
        &self.session
    }

    /// Apply one intent. Each intent reaches the session as at most one
    /// operation, except that answering the last question also finishes the
    /// quiz when auto-finish is on.
    ///
    /// # Errors
    ///
    /// Returns the `QuizError` the session refused the operation with; it is
    /// also kept for display until the next successful intent.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<(), QuizError> {
        let result = self.apply(intent);
        match result {
            Ok(()) => self.error = None,
            Err(err) => {
                warn!("quiz intent {intent:?} rejected: {err}");
                self.error = Some(err);
            }
        }
        result
    }

    fn apply(&mut self, intent: QuizIntent) -> Result<(), QuizError> {
        match intent {
            QuizIntent::Start => {
                self.session.start()?;
                self.last_answer = None;
            }
            QuizIntent::Answer(index) => {
                let outcome = self.session.submit_answer(index)?;
                self.last_answer = Some((index, outcome));
                if outcome.is_last && self.auto_finish {
                    self.finish_after_last()?;
                }
            }
            QuizIntent::Next => {
                self.session.advance()?;
                self.last_answer = None;
            }
            QuizIntent::End => {
                self.session.end_now()?;
                self.last_answer = None;
            }
            QuizIntent::Enter => match self.session.phase() {
                Phase::Idle | Phase::Finished => return self.apply(QuizIntent::Start),
                Phase::InProgress if self.session.is_locked() => {
                    return self.apply(QuizIntent::Next);
                }
                Phase::InProgress => {}
            },
            QuizIntent::ToggleInstructions => {
                self.instructions_open = !self.instructions_open;
            }
            QuizIntent::CloseInstructions => {
                self.instructions_open = false;
            }
        }
        Ok(())
    }

    fn finish_after_last(&mut self) -> Result<(), QuizError> {
        if self.session.advance()? == Advance::Finished {
            self.last_answer = None;
        }
        Ok(())
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    #[must_use]
    pub fn error(&self) -> Option<QuizError> {
        self.error
    }

    /// Status of the page background: the correctness of the last submission.
    #[must_use]
    pub fn page_status(&self) -> Status {
        self.last_answer
            .map_or(Status::Neutral, |(_, outcome)| {
                Status::from_correct(outcome.correct)
            })
    }

    #[must_use]
    pub fn focus_key(&self) -> FocusKey {
        FocusKey {
            progress: self.session.progress(),
            instructions_open: self.instructions_open,
        }
    }

    #[must_use]
    pub fn answer_buttons(&self) -> Vec<AnswerButtonVm> {
        let Ok(question) = self.session.current_question() else {
            return Vec::new();
        };
        let locked = self.session.is_locked();
        let chosen = self.last_answer.map(|(index, _)| index);

        question
            .answers()
            .iter()
            .enumerate()
            .map(|(index, answer)| AnswerButtonVm {
                index,
                text: answer.text().to_string(),
                status: if locked {
                    Status::from_correct(answer.is_correct())
                } else {
                    Status::Neutral
                },
                selected: chosen == Some(index),
                disabled: locked,
            })
            .collect()
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let progress = self.session.progress();
        let phase = progress.phase;
        let prompt = self
            .session
            .current_question()
            .ok()
            .map(|question| question.prompt().to_string());

        QuizScreenVm {
            phase,
            prompt,
            counter_label: format!("Q #{}", progress.position + 1),
            score_label: format!("Score: {}", progress.score),
            answers: self.answer_buttons(),
            page_status: self.page_status(),
            can_advance: phase == Phase::InProgress && progress.locked,
            start_label: if phase == Phase::Finished {
                "RESTART"
            } else {
                "START"
            },
            stats: map_stats(&self.session),
            error: self.error.map(|err| err.to_string()),
            instructions_open: self.instructions_open,
        }
    }
}
