mod quiz;
mod state;

pub use quiz::{AnswerMap, DisplayQuestion, DisplayQuiz, Question, Quiz};
pub use state::AppState;
