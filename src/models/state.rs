/// Which screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browsing the list of available quizzes.
    Browse,
    /// Answering questions of the active quiz.
    Quiz,
    /// Viewing the score, grade, and per-question breakdown.
    Result,
}
