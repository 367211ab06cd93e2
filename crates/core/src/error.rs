use thiserror::Error;

use crate::session::{Operation, Phase};

/// Protocol violations reported by `QuizSession`.
///
/// None of these are transient: a presenter that follows the
/// start / submit / advance protocol never sees them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question bank is empty")]
    EmptyBank,

    #[error("{operation} is not allowed while the session is {phase}")]
    InvalidPhase { operation: Operation, phase: Phase },

    #[error("position {position} is past the last question (total {total})")]
    OutOfRange { position: usize, total: usize },

    #[error("current question has already been answered")]
    AlreadyAnswered,

    #[error("answer index {index} is out of range ({available} answers)")]
    InvalidAnswer { index: usize, available: usize },

    #[error("current question must be answered before advancing")]
    NotAnswered,

    #[error("percentage is undefined when no questions were answered")]
    DivisionUndefined,
}
