mod quiz_vm;
mod stats_vm;

pub use quiz_vm::{AnswerButtonVm, FocusKey, QuizIntent, QuizScreenVm, QuizVm, Status};
pub use stats_vm::{StatsVm, map_stats};
