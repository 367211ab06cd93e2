#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod stats;
pub mod time;

pub use error::QuizError;
pub use model::{Answer, Question, QuestionBank, QuestionDraft, QuestionError};
pub use session::{
    Advance, AnswerOutcome, Operation, Phase, QuizSession, SessionProgress, Submission,
};
pub use shuffle::ShuffledOrder;
pub use stats::SessionStats;
pub use time::Clock;
