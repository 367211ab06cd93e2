use std::fmt;

use crate::error::QuizError;

/// End-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    score: usize,
    answered_count: usize,
    percentage: f64,
}

impl SessionStats {
    /// Build stats from the final score and number of answered questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::DivisionUndefined` when nothing was answered.
    pub fn compute(score: usize, answered_count: usize) -> Result<Self, QuizError> {
        Ok(Self {
            score,
            answered_count,
            percentage: percentage(score, answered_count)?,
        })
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered_count
    }

    /// Percentage correct, rounded to two decimals (`50.0` for half right).
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Percentage formatted for display, e.g. `66.67%`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{:.2}%", self.percentage)
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} correct ({})",
            self.score,
            self.answered_count,
            self.percentage_label()
        )
    }
}

/// `score / answered * 100`, rounded to two decimals.
///
/// # Errors
///
/// Returns `QuizError::DivisionUndefined` when `answered` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(score: usize, answered: usize) -> Result<f64, QuizError> {
    if answered == 0 {
        return Err(QuizError::DivisionUndefined);
    }
    let raw = score as f64 / answered as f64 * 100.0;
    Ok((raw * 100.0).round() / 100.0)
}
