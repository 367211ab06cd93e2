use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("a question needs at least 2 answers, got {count}")]
    TooFewAnswers { count: usize },

    #[error("answer {index} has empty text")]
    EmptyAnswerText { index: usize },

    #[error("question has no correct answer")]
    NoCorrectAnswer,

    #[error("question has {count} correct answers, expected exactly one")]
    MultipleCorrectAnswers { count: usize },
}

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// One candidate response to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    text: String,
    #[serde(default)]
    correct: bool,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }

    /// Shorthand for the single correct answer of a question.
    #[must_use]
    pub fn correct(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    #[must_use]
    pub fn wrong(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as authored in a bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    #[serde(rename = "question")]
    pub prompt: String,
    pub answers: Vec<Answer>,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            prompt: prompt.into(),
            answers,
        }
    }

    /// Trim the text fields and check the question shape.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt or an answer is blank, when there
    /// are fewer than two answers, or when the answers do not contain exactly one
    /// correct entry.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }

        if self.answers.len() < 2 {
            return Err(QuestionError::TooFewAnswers {
                count: self.answers.len(),
            });
        }

        let mut answers = Vec::with_capacity(self.answers.len());
        for (index, answer) in self.answers.into_iter().enumerate() {
            let text = answer.text.trim();
            if text.is_empty() {
                return Err(QuestionError::EmptyAnswerText { index });
            }
            answers.push(Answer::new(text, answer.correct));
        }

        let mut correct = answers.iter().enumerate().filter(|(_, a)| a.is_correct());
        let correct_index = match (correct.next(), correct.count()) {
            (None, _) => return Err(QuestionError::NoCorrectAnswer),
            (Some((index, _)), 0) => index,
            (Some(_), rest) => {
                return Err(QuestionError::MultipleCorrectAnswers { count: rest + 1 });
            }
        };

        Ok(Question {
            prompt,
            answers,
            correct_index,
        })
    }
}

/// A prompt with two or more answers, exactly one of which is correct.
///
/// Answer order is kept exactly as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionDraft", into = "QuestionDraft")]
pub struct Question {
    prompt: String,
    answers: Vec<Answer>,
    correct_index: usize,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// See [`QuestionDraft::validate`].
    pub fn new(prompt: impl Into<String>, answers: Vec<Answer>) -> Result<Self, QuestionError> {
        QuestionDraft::new(prompt, answers).validate()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    /// Index of the one correct answer.
    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }
}

impl TryFrom<QuestionDraft> for Question {
    type Error = QuestionError;

    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        draft.validate()
    }
}

impl From<Question> for QuestionDraft {
    fn from(question: Question) -> Self {
        Self {
            prompt: question.prompt,
            answers: question.answers,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn two_answers() -> Vec<Answer> {
        vec![Answer::correct("dog"), Answer::wrong("cat")]
    }

    #[test]
    fn question_trims_text_and_finds_correct_answer() {
        let question = Question::new(
            "  What is a grown up puppy?  ",
            vec![Answer::wrong(" cat "), Answer::correct(" dog")],
        )
        .unwrap();

        assert_eq!(question.prompt(), "What is a grown up puppy?");
        assert_eq!(question.answers()[0].text(), "cat");
        assert_eq!(question.correct_index(), 1);
        assert!(question.answer(1).unwrap().is_correct());
        assert!(question.answer(2).is_none());
    }

    #[rstest]
    #[case::blank_prompt("   ", two_answers(), QuestionError::EmptyPrompt)]
    #[case::one_answer("Q", vec![Answer::correct("a")], QuestionError::TooFewAnswers { count: 1 })]
    #[case::no_answers("Q", Vec::new(), QuestionError::TooFewAnswers { count: 0 })]
    #[case::blank_answer(
        "Q",
        vec![Answer::correct("a"), Answer::wrong("  ")],
        QuestionError::EmptyAnswerText { index: 1 }
    )]
    #[case::no_correct(
        "Q",
        vec![Answer::wrong("a"), Answer::wrong("b")],
        QuestionError::NoCorrectAnswer
    )]
    #[case::two_correct(
        "Q",
        vec![Answer::correct("a"), Answer::correct("b"), Answer::wrong("c")],
        QuestionError::MultipleCorrectAnswers { count: 2 }
    )]
    fn invalid_questions_are_rejected(
        #[case] prompt: &str,
        #[case] answers: Vec<Answer>,
        #[case] expected: QuestionError,
    ) {
        let err = Question::new(prompt, answers).unwrap_err();
        assert_eq!(err, expected);
    }

    #[test]
    fn question_deserializes_through_validation() {
        let json = r#"{
            "question": "what is 2 + 10?",
            "answers": [
                {"text": "12", "correct": true},
                {"text": "22"}
            ]
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.correct_index(), 0);
        assert!(!question.answers()[1].is_correct());

        let bad = r#"{"question": "q", "answers": [{"text": "a"}, {"text": "b"}]}"#;
        let err = serde_json::from_str::<Question>(bad).unwrap_err();
        assert!(err.to_string().contains("no correct answer"), "{err}");
    }

    #[test]
    fn question_serializes_in_bank_file_shape() {
        let question = Question::new("Q", two_answers()).unwrap();
        let value = serde_json::to_value(&question).unwrap();
        assert_eq!(value["question"], "Q");
        assert_eq!(value["answers"][0]["correct"], true);
    }
}
