mod bank;
mod question;

pub use bank::QuestionBank;
pub use question::{Answer, Question, QuestionDraft, QuestionError};
