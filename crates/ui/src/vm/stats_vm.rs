use rand::Rng;

use quiz_core::time::format_elapsed;
use quiz_core::{Phase, QuizError, QuizSession};

use crate::vm::quiz_vm::Status;

/// Labels and bar blocks for the finished screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub score_label: String,
    pub answered_label: String,
    pub percentage_label: String,
    pub elapsed_label: Option<String>,
    /// One block per answered question, colored by its own outcome.
    pub blocks: Vec<Status>,
}

/// Map a finished session to its summary; `None` while the quiz is not over.
#[must_use]
pub fn map_stats<R: Rng>(session: &QuizSession<R>) -> Option<StatsVm> {
    if session.phase() != Phase::Finished {
        return None;
    }

    let percentage = match session.stats() {
        Ok(stats) => stats.percentage_label(),
        Err(QuizError::DivisionUndefined) => "N/A".to_string(),
        Err(_) => return None,
    };

    Some(StatsVm {
        score_label: format!("Overall Score: {}", session.score()),
        answered_label: format!("Total Questions Answered: {}", session.answered_count()),
        percentage_label: format!("Percentage Correct: {percentage}"),
        elapsed_label: session
            .elapsed()
            .map(|elapsed| format!("Time: {}", format_elapsed(elapsed))),
        blocks: session
            .per_question_outcomes()
            .map(Status::from_correct)
            .collect(),
    })
}
